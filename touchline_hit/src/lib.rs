// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchline Hit: pointer hit testing over board entities and zones.
//!
//! Hit testing resolves a surface-space point to the topmost entity under
//! it, honoring the board's fixed stacking order. The ball is drawn last and
//! therefore wins over everything; away markers are drawn after home markers
//! and win over them; within a team, later indices are drawn later and win
//! on overlap, so both rosters are scanned in reverse.
//!
//! Named home markers carry their name label below the circle, and the label
//! is part of the marker's hit region. The label box comes from
//! [`PitchLayout::name_label_metrics`], the same metrics the painter uses,
//! so what looks clickable is clickable.
//!
//! Two queries deliberately do not share the entity priority rules:
//!
//! - [`hit_test_zone`] buckets a point into the 18-cell annotation grid and
//!   ignores entities entirely. The caller gates it on the zone overlay
//!   being active.
//! - [`attach_candidate`] is not about the pointer at all: it asks which
//!   player the *ball* currently touches (combined marker + ball radius),
//!   scanning home before away, first match wins. The gesture layer runs it
//!   when the ball is released to decide auto-attachment.
//!
//! All tests are circle tests against squared distances; nothing here
//! allocates.

#![no_std]

use kurbo::{Point, Rect};
use touchline_pitch::{PitchLayout, ZoneId};
use touchline_squad::{PlayerRef, Squad};

/// The entity a hit test resolved to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntityRef {
    /// The ball.
    Ball,
    /// A player on either team.
    Player(PlayerRef),
}

/// Resolves the topmost entity under a surface-space point.
///
/// Priority is strict: ball, then away players, then home players, with
/// later indices winning within a team. Returns `None` over empty pitch.
#[must_use]
pub fn hit_test(layout: &PitchLayout, squad: &Squad, pt: Point) -> Option<EntityRef> {
    if hits_circle(pt, layout.field_to_surface(squad.ball().position()), layout.ball_radius()) {
        return Some(EntityRef::Ball);
    }

    let marker_r = layout.marker_radius();
    for (i, p) in squad.away().iter().enumerate().rev() {
        if hits_circle(pt, layout.field_to_surface(p.position()), marker_r) {
            return Some(EntityRef::Player(PlayerRef::away(i)));
        }
    }

    let label = layout.name_label_metrics();
    for (i, p) in squad.home().iter().enumerate().rev() {
        let center = layout.field_to_surface(p.position());
        if hits_circle(pt, center, marker_r) {
            return Some(EntityRef::Player(PlayerRef::home(i)));
        }
        if p.name().is_some() {
            let top = center.y + label.top_offset;
            let region = Rect::new(
                center.x - label.half_width,
                top,
                center.x + label.half_width,
                top + label.height,
            );
            if region.contains(pt) {
                return Some(EntityRef::Player(PlayerRef::home(i)));
            }
        }
    }
    None
}

/// Buckets a surface-space point into an annotation grid cell.
///
/// Independent of entity hit testing; returns `None` outside the field
/// rectangle. Only meaningful while the zone overlay is active, which the
/// caller is responsible for checking.
#[must_use]
pub fn hit_test_zone(layout: &PitchLayout, pt: Point) -> Option<ZoneId> {
    layout.zone_at(pt)
}

/// Finds the player the ball currently touches, if any.
///
/// Proximity is measured in surface space between the ball center and each
/// player center against the combined marker + ball radius. Home players are
/// checked before away players; the first match wins. This drives
/// auto-attachment when the ball is released and is independent of what was
/// clicked.
#[must_use]
pub fn attach_candidate(layout: &PitchLayout, squad: &Squad) -> Option<PlayerRef> {
    let ball_px = layout.field_to_surface(squad.ball().position());
    let threshold = layout.marker_radius() + layout.ball_radius();

    for (i, p) in squad.home().iter().enumerate() {
        if hits_circle(ball_px, layout.field_to_surface(p.position()), threshold) {
            return Some(PlayerRef::home(i));
        }
    }
    for (i, p) in squad.away().iter().enumerate() {
        if hits_circle(ball_px, layout.field_to_surface(p.position()), threshold) {
            return Some(PlayerRef::away(i));
        }
    }
    None
}

fn hits_circle(pt: Point, center: Point, radius: f64) -> bool {
    (pt - center).hypot2() <= radius * radius
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};
    use touchline_squad::Team;

    use super::*;

    fn layout() -> PitchLayout {
        PitchLayout::compute(Size::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn goalkeeper_is_hit_at_its_mapped_pixel() {
        // Scale 600/105 puts the GK at (8, 34) roughly (45.7, 194.3) from the
        // rect origin.
        let layout = layout();
        let squad = Squad::new();
        let gk_px = layout.field_to_surface(Point::new(8.0, 34.0));
        assert_eq!(
            hit_test(&layout, &squad, gk_px),
            Some(EntityRef::Player(PlayerRef::home(0)))
        );
    }

    #[test]
    fn ball_wins_over_overlapping_players() {
        let layout = layout();
        let mut squad = Squad::new();
        // Stack a home player, an away player, and the ball on one spot.
        let spot = Point::new(52.5, 34.0);
        squad.move_player(PlayerRef::home(4), spot);
        squad.move_player(PlayerRef::away(4), spot);
        squad.move_ball(spot);

        let px = layout.field_to_surface(spot);
        assert_eq!(hit_test(&layout, &squad, px), Some(EntityRef::Ball));
    }

    #[test]
    fn away_wins_over_home_and_later_index_wins_within_a_team() {
        let layout = layout();
        let mut squad = Squad::new();
        let spot = Point::new(30.0, 30.0);
        squad.move_player(PlayerRef::home(2), spot);
        squad.move_player(PlayerRef::away(5), spot);
        squad.move_player(PlayerRef::away(6), spot);

        let px = layout.field_to_surface(spot);
        assert_eq!(
            hit_test(&layout, &squad, px),
            Some(EntityRef::Player(PlayerRef::away(6)))
        );
    }

    #[test]
    fn misses_resolve_to_none() {
        let layout = layout();
        let squad = Squad::new();
        // The top-left field corner is far from every default position.
        let px = layout.field_to_surface(Point::new(0.5, 0.5));
        assert_eq!(hit_test(&layout, &squad, px), None);
    }

    #[test]
    fn circle_test_respects_marker_radius() {
        let layout = layout();
        let squad = Squad::new();
        let center = layout.field_to_surface(squad.home()[0].position());
        let r = layout.marker_radius();

        let inside = center + Vec2::new(r - 0.5, 0.0);
        let outside = center + Vec2::new(r + 0.5, 0.0);
        assert!(hit_test(&layout, &squad, inside).is_some());
        assert!(hit_test(&layout, &squad, outside).is_none());
    }

    #[test]
    fn name_label_extends_the_hit_region() {
        let layout = layout();
        let mut squad = Squad::new();
        let center = layout.field_to_surface(squad.home()[3].position());
        let metrics = layout.name_label_metrics();
        let below = Point::new(center.x, center.y + metrics.top_offset + metrics.height / 2.0);

        // Unnamed: the point below the marker misses.
        assert_eq!(hit_test(&layout, &squad, below), None);

        // Named: the same point hits via the label box.
        squad.assign_name(3, Some("Linus"));
        assert_eq!(
            hit_test(&layout, &squad, below),
            Some(EntityRef::Player(PlayerRef::home(3)))
        );
    }

    #[test]
    fn zone_hit_is_independent_of_entities() {
        let layout = layout();
        // A point just past the halfway line, middle row: column 3, zone 11.
        let rect = layout.rect();
        let pt = Point::new(rect.x0 + rect.width() * 0.55, rect.center().y);
        assert_eq!(hit_test_zone(&layout, pt).unwrap().number(), 11);
        assert!(hit_test_zone(&layout, Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn attach_candidate_uses_combined_radius() {
        let layout = layout();
        let mut squad = Squad::new();
        let player_pos = squad.home()[5].position();
        let combined = layout.marker_radius() + layout.ball_radius();
        let scale = layout.scale();

        // Just inside the combined radius (converted to meters).
        squad.move_ball(player_pos + Vec2::new((combined - 0.5) / scale, 0.0));
        assert_eq!(
            attach_candidate(&layout, &squad),
            Some(PlayerRef::home(5))
        );

        // Just outside: no candidate.
        squad.move_ball(player_pos + Vec2::new((combined + 0.5) / scale, 0.0));
        assert_eq!(attach_candidate(&layout, &squad), None);
    }

    #[test]
    fn attach_candidate_prefers_home_over_away() {
        let layout = layout();
        let mut squad = Squad::new();
        let spot = Point::new(40.0, 40.0);
        squad.move_player(PlayerRef::home(7), spot);
        squad.move_player(PlayerRef::away(7), spot);
        squad.move_ball(spot);

        let candidate = attach_candidate(&layout, &squad).unwrap();
        assert_eq!(candidate.team, Team::Home);
        assert_eq!(candidate.index, 7);
    }
}
