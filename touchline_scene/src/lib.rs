// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchline Scene: the board frame as a backend-agnostic display list.
//!
//! [`build`] reads the current board state and produces a `Vec<SceneOp>`, a
//! flat list of plain-data paint operations in surface coordinates. The ops
//! carry everything a backend needs (geometry in pixels, [`peniko::Color`]
//! with premixed alpha); replaying them in order on any 2D canvas backend
//! (web canvas, Vello, Skia) reproduces the frame. Nothing here retains state
//! between frames: the list is rebuilt from scratch on every redraw, which
//! is also what keeps the responsibility overlay honest while a sibling
//! player is mid-drag.
//!
//! Paint order is fixed: pitch markings, zone overlay, responsibility
//! overlay, home and away markers, ball. The ball is painted last and is
//! therefore on top, which mirrors the hit-testing priority in
//! `touchline_hit`.
//!
//! The one external resource is the ball image, loaded by the host once and
//! asynchronously. Until it is available (or when loading failed) the ball
//! is a procedurally drawn circle; a loaded image is referenced with
//! [`SceneOp::BallImage`] and drawn into the given rectangle.
//!
//! Gloss, shadows, and seam artwork are host presentation detail and have
//! no ops here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entities;
mod markings;
mod overlays;
mod palette;

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use peniko::Color;
use touchline_pitch::PitchLayout;
use touchline_squad::{Squad, ZoneMap};

pub use palette::role_color;

/// Horizontal/vertical anchoring of a text op's origin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TextAnchor {
    /// Origin is the center of the rendered text.
    Center,
    /// Origin is the top-center of the rendered text.
    TopCenter,
}

/// One paint operation, in surface coordinates.
///
/// Angles are radians in the screen frame (x to the right, y down, positive
/// sweep turning from +x toward +y).
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color (alpha premixed).
        color: Color,
    },
    /// Stroke an axis-aligned rectangle.
    StrokeRect {
        /// Rectangle to stroke.
        rect: Rect,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Fill a circle.
    FillCircle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Stroke a circle outline.
    StrokeCircle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Stroke a straight line segment.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Stroke a circular arc.
    Arc {
        /// Arc center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// Sweep in radians (positive sweeps toward +y).
        sweep_angle: f64,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Draw a text run.
    Text {
        /// The text to draw.
        text: String,
        /// Anchor position per `anchor`.
        origin: Point,
        /// Font size in pixels.
        size_px: f64,
        /// Text color.
        color: Color,
        /// How `origin` anchors the run.
        anchor: TextAnchor,
        /// Whether to use the bold weight.
        bold: bool,
        /// Optional outline stroked behind the fill.
        outline: Option<Color>,
    },
    /// Draw the host-loaded ball image into a rectangle.
    BallImage {
        /// Destination rectangle.
        rect: Rect,
    },
}

/// Frame options supplied by the board controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneOptions {
    /// Whether the zone overlay is painted.
    pub zones_visible: bool,
    /// Whether the responsibility overlay is painted.
    pub areas_visible: bool,
    /// The selected home player, if any.
    pub selected: Option<usize>,
    /// Whether the host's ball image finished loading.
    pub ball_image_loaded: bool,
}

/// Builds the display list for one frame.
#[must_use]
pub fn build(
    layout: &PitchLayout,
    squad: &Squad,
    zones: &ZoneMap,
    options: &SceneOptions,
) -> Vec<SceneOp> {
    let mut ops = Vec::new();
    markings::paint(&mut ops, layout);
    if options.zones_visible {
        overlays::paint_zones(&mut ops, layout, zones);
    }
    if options.areas_visible {
        if let Some(selected) = options.selected {
            overlays::paint_responsibility(&mut ops, layout, squad, selected);
        }
    }
    entities::paint_players(&mut ops, layout, squad, options);
    entities::paint_ball(&mut ops, layout, squad, options.ball_image_loaded);
    ops
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use touchline_pitch::ZoneId;
    use touchline_squad::{PlayerRef, Role, ZoneMarks};

    use super::*;

    fn layout() -> PitchLayout {
        PitchLayout::compute(Size::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn frame_starts_with_the_field_boundary() {
        let layout = layout();
        let squad = Squad::new();
        let ops = build(&layout, &squad, &ZoneMap::new(), &SceneOptions::default());
        match &ops[0] {
            SceneOp::StrokeRect { rect, .. } => assert_eq!(*rect, layout.rect()),
            other => panic!("expected boundary stroke, got {other:?}"),
        }
    }

    #[test]
    fn markers_cover_both_rosters() {
        let layout = layout();
        let squad = Squad::new();
        let ops = build(&layout, &squad, &ZoneMap::new(), &SceneOptions::default());
        let marker_fills = ops
            .iter()
            .filter(|op| {
                matches!(op, SceneOp::FillCircle { radius, .. } if *radius == layout.marker_radius())
            })
            .count();
        assert_eq!(marker_fills, squad.home().len() + squad.away().len());
    }

    #[test]
    fn ball_falls_back_to_a_circle_until_the_image_loads() {
        let layout = layout();
        let squad = Squad::new();

        let ops = build(&layout, &squad, &ZoneMap::new(), &SceneOptions::default());
        assert!(!ops.iter().any(|op| matches!(op, SceneOp::BallImage { .. })));
        assert!(ops.iter().any(
            |op| matches!(op, SceneOp::FillCircle { radius, .. } if *radius == layout.ball_radius())
        ));

        let ops = build(
            &layout,
            &squad,
            &ZoneMap::new(),
            &SceneOptions {
                ball_image_loaded: true,
                ..SceneOptions::default()
            },
        );
        let ball_px = layout.field_to_surface(squad.ball().position());
        let r = layout.ball_radius();
        assert!(ops.iter().any(|op| matches!(
            op,
            SceneOp::BallImage { rect }
                if (rect.x0 - (ball_px.x - r)).abs() < 1e-9 && (rect.width() - 2.0 * r).abs() < 1e-9
        )));
    }

    #[test]
    fn zone_overlay_paints_all_cell_numbers_when_active() {
        let layout = layout();
        let squad = Squad::new();
        let mut zones = ZoneMap::new();
        zones.toggle_primary(ZoneId::from_number(5).unwrap());

        let off = build(&layout, &squad, &zones, &SceneOptions::default());
        let on = build(
            &layout,
            &squad,
            &zones,
            &SceneOptions {
                zones_visible: true,
                ..SceneOptions::default()
            },
        );

        let numbers = |ops: &[SceneOp]| {
            (1..=18)
                .filter(|n| {
                    ops.iter().any(|op| {
                        matches!(op, SceneOp::Text { text, .. } if text == &alloc::format!("{n}"))
                    })
                })
                .count()
        };
        assert_eq!(numbers(&off), 0);
        assert_eq!(numbers(&on), 18);
    }

    #[test]
    fn flagged_zones_get_a_cross() {
        let layout = layout();
        let squad = Squad::new();
        let mut zones = ZoneMap::new();
        let zone = ZoneId::from_number(9).unwrap();
        zones.toggle_flag(zone);
        assert_eq!(zones.marks(zone), ZoneMarks::FLAG);

        let ops = build(
            &layout,
            &squad,
            &zones,
            &SceneOptions {
                zones_visible: true,
                ..SceneOptions::default()
            },
        );
        let crosses = ops
            .iter()
            .filter(|op| {
                matches!(op, SceneOp::Line { p0, .. } if layout.zone_rect(zone).contains(*p0))
            })
            .count();
        assert_eq!(crosses, 2);
    }

    #[test]
    fn responsibility_overlay_requires_selection_and_toggle() {
        let layout = layout();
        let squad = Squad::new();
        let zones = ZoneMap::new();
        let gk = 0;
        assert_eq!(squad.home()[gk].role(), Role::Gk);

        // Toggle off: no overlay even with a selection.
        let ops = build(
            &layout,
            &squad,
            &zones,
            &SceneOptions {
                selected: Some(gk),
                ..SceneOptions::default()
            },
        );
        // Only the overlays emit rectangle fills, so their presence is the
        // overlay's presence.
        let overlay_fill =
            |ops: &[SceneOp]| ops.iter().any(|op| matches!(op, SceneOp::FillRect { .. }));
        assert!(!overlay_fill(&ops));

        // Toggle on with a selection: the role-colored area appears.
        let ops = build(
            &layout,
            &squad,
            &zones,
            &SceneOptions {
                areas_visible: true,
                selected: Some(gk),
                ..SceneOptions::default()
            },
        );
        assert!(overlay_fill(&ops));
    }

    #[test]
    fn named_players_get_an_outlined_label() {
        let layout = layout();
        let mut squad = Squad::new();
        squad.assign_name(2, Some("Sakima"));

        let ops = build(&layout, &squad, &ZoneMap::new(), &SceneOptions::default());
        assert!(ops.iter().any(|op| matches!(
            op,
            SceneOp::Text { text, outline, .. } if text == "Sakima" && outline.is_some()
        )));
    }

    #[test]
    fn selected_marker_is_tinted_while_the_overlay_is_on() {
        let layout = layout();
        let squad = Squad::new();
        let str_idx = squad
            .home()
            .iter()
            .position(|p| p.role() == Role::Str)
            .unwrap();
        let center = layout.field_to_surface(squad.home()[str_idx].position());

        let ops = build(
            &layout,
            &squad,
            &ZoneMap::new(),
            &SceneOptions {
                areas_visible: true,
                selected: Some(str_idx),
                ..SceneOptions::default()
            },
        );
        assert!(ops.iter().any(|op| matches!(
            op,
            SceneOp::FillCircle { center: c, color, .. }
                if *c == center && *color == role_color(Role::Str)
        )));
    }

    #[test]
    fn dragging_positions_flow_straight_into_the_frame() {
        let layout = layout();
        let mut squad = Squad::new();
        let target = Point::new(60.0, 20.0);
        squad.move_player(PlayerRef::home(4), target);

        let ops = build(&layout, &squad, &ZoneMap::new(), &SceneOptions::default());
        let px = layout.field_to_surface(target);
        assert!(ops.iter().any(|op| matches!(
            op,
            SceneOp::FillCircle { center, .. } if *center == px
        )));
    }
}
