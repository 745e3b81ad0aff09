// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Role-derived "area of responsibility" rectangles.
//!
//! Every rectangle is a pure function of the current squad, in field-metric
//! meters with the home goal on the left. Most roles map to fixed bands;
//! central midfielders are dynamic and divide the midfield between the two
//! of them based on live sibling positions, so the result must be recomputed
//! on every draw rather than cached.

use kurbo::Rect;
use touchline_pitch::{FIELD_LENGTH, FIELD_WIDTH};

use crate::squad::{Role, Squad};

/// Halfway line x coordinate.
const HALF_X: f64 = FIELD_LENGTH / 2.0;
/// How far defensive zones overflow into the opposing half.
const OVERFLOW: f64 = 8.0;
/// Penalty area depth; midfield zones start half of it up the pitch.
const PENALTY_DEPTH: f64 = 16.5;
/// Width kept clear of the touchlines by central roles.
const WING_MARGIN: f64 = 15.0;
/// Slack added around neighboring roles in the dynamic midfield split.
const CM_PAD: f64 = 2.0;

/// Computes the responsibility rectangle for the home player at `index`.
///
/// Returns `None` for a stale index and for roles without a mapped area
/// (wingers); the overlay simply does not render in those cases. A central
/// midfielder in a roster without the expected siblings (exactly two CMs
/// plus an LM and an RM) degrades to a fixed static band.
#[must_use]
pub fn responsibility_rect(squad: &Squad, index: usize) -> Option<Rect> {
    let player = squad.home().get(index)?;
    let mid_x0 = PENALTY_DEPTH / 2.0;
    match player.role() {
        Role::Gk => {
            // Own half, vertically centered 40 m band.
            let band = 40.0;
            Some(Rect::new(
                0.0,
                (FIELD_WIDTH - band) / 2.0,
                HALF_X,
                (FIELD_WIDTH + band) / 2.0,
            ))
        }
        Role::Ld => Some(Rect::new(0.0, 0.0, HALF_X + OVERFLOW, FIELD_WIDTH / 2.0)),
        Role::Rd => Some(Rect::new(
            0.0,
            FIELD_WIDTH / 2.0,
            HALF_X + OVERFLOW,
            FIELD_WIDTH,
        )),
        Role::Cd => Some(Rect::new(
            0.0,
            WING_MARGIN,
            HALF_X + OVERFLOW,
            FIELD_WIDTH - WING_MARGIN,
        )),
        Role::Lm => Some(Rect::new(mid_x0, 0.0, FIELD_LENGTH, FIELD_WIDTH / 2.0)),
        Role::Rm => Some(Rect::new(
            mid_x0,
            FIELD_WIDTH / 2.0,
            FIELD_LENGTH,
            FIELD_WIDTH,
        )),
        Role::Cm => Some(central_midfield_rect(squad, index, mid_x0)),
        Role::Str => {
            let quarter = FIELD_LENGTH / 4.0;
            Some(Rect::new(
                HALF_X - quarter,
                FIELD_WIDTH / 4.0,
                FIELD_LENGTH,
                FIELD_WIDTH * 3.0 / 4.0,
            ))
        }
        Role::Lw | Role::Rw => None,
    }
}

/// The dynamic midfield split for one of the two central midfielders.
///
/// The upper CM covers from just above the left midfielder down to just
/// below the lower CM; the lower CM covers from just above the upper CM down
/// to just below the right midfielder. Any other role composition falls back
/// to a fixed band.
fn central_midfield_rect(squad: &Squad, index: usize, x0: f64) -> Rect {
    let fallback = Rect::new(x0, 6.0, FIELD_LENGTH, 62.0);

    let mut lm_y = None;
    let mut rm_y = None;
    let mut cms: [usize; 2] = [0; 2];
    let mut cm_count = 0usize;
    for (i, p) in squad.home().iter().enumerate() {
        match p.role() {
            Role::Lm => lm_y = Some(p.position().y),
            Role::Rm => rm_y = Some(p.position().y),
            Role::Cm => {
                if cm_count < 2 {
                    cms[cm_count] = i;
                }
                cm_count += 1;
            }
            _ => {}
        }
    }
    let (Some(lm_y), Some(rm_y)) = (lm_y, rm_y) else {
        return fallback;
    };
    if cm_count != 2 {
        return fallback;
    }

    let (a, b) = (cms[0], cms[1]);
    let ay = squad.home()[a].position().y;
    let by = squad.home()[b].position().y;
    let (upper, lower) = if ay <= by { (a, b) } else { (b, a) };
    let upper_y = squad.home()[upper].position().y;
    let lower_y = squad.home()[lower].position().y;

    if index == upper {
        let y0 = (lm_y - CM_PAD).max(0.0);
        let y1 = (lower_y + CM_PAD).min(FIELD_WIDTH);
        Rect::new(x0, y0, FIELD_LENGTH, y1)
    } else if index == lower {
        let y0 = (upper_y - CM_PAD).max(0.0);
        let y1 = (rm_y + CM_PAD).min(FIELD_WIDTH);
        Rect::new(x0, y0, FIELD_LENGTH, y1)
    } else {
        fallback
    }
}
