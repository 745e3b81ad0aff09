// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zone-annotation and responsibility overlays.

use alloc::format;
use alloc::vec::Vec;
use kurbo::Point;
use touchline_pitch::{PitchLayout, ZONE_COUNT, ZoneId};
use touchline_squad::{Squad, ZoneMap, ZoneMarks, responsibility_rect};

use crate::palette::{PITCH_LINE, ZONE_CROSS, ZONE_FLAG, ZONE_HIGHLIGHT, role_color};
use crate::{SceneOp, TextAnchor};

pub(crate) fn paint_zones(ops: &mut Vec<SceneOp>, layout: &PitchLayout, zones: &ZoneMap) {
    let scale = layout.scale();
    let grid_w = (0.08 * scale).max(1.0);

    for number in 1..=ZONE_COUNT {
        // `number` is always in range here.
        let Some(zone) = ZoneId::from_number(number) else {
            continue;
        };
        let cell = layout.zone_rect(zone);
        let marks = zones.marks(zone);

        if marks.contains(ZoneMarks::HIGHLIGHT) {
            ops.push(SceneOp::FillRect {
                rect: cell,
                color: ZONE_HIGHLIGHT.with_alpha(0.5),
            });
        }
        if marks.contains(ZoneMarks::FLAG) {
            ops.push(SceneOp::FillRect {
                rect: cell,
                color: ZONE_FLAG.with_alpha(0.3),
            });
        }

        ops.push(SceneOp::StrokeRect {
            rect: cell,
            width: grid_w,
            color: PITCH_LINE.with_alpha(0.15),
        });
        ops.push(SceneOp::Text {
            text: format!("{number}"),
            origin: cell.center(),
            size_px: (cell.width() * 0.15).clamp(12.0, 24.0),
            color: PITCH_LINE.with_alpha(0.8),
            anchor: TextAnchor::Center,
            bold: true,
            outline: None,
        });

        if marks.contains(ZoneMarks::FLAG) {
            let center = cell.center();
            let arm = cell.width().min(cell.height()) * 0.3;
            let cross_w = (0.12 * scale).max(2.0);
            ops.push(SceneOp::Line {
                p0: Point::new(center.x - arm, center.y - arm),
                p1: Point::new(center.x + arm, center.y + arm),
                width: cross_w,
                color: ZONE_CROSS,
            });
            ops.push(SceneOp::Line {
                p0: Point::new(center.x + arm, center.y - arm),
                p1: Point::new(center.x - arm, center.y + arm),
                width: cross_w,
                color: ZONE_CROSS,
            });
        }
    }
}

/// Paints the responsibility rectangle of the selected home player.
///
/// The rectangle is derived from live squad state on every call; roles
/// without a mapped area (and stale selections) paint nothing.
pub(crate) fn paint_responsibility(
    ops: &mut Vec<SceneOp>,
    layout: &PitchLayout,
    squad: &Squad,
    selected: usize,
) {
    let Some(area) = responsibility_rect(squad, selected) else {
        return;
    };
    let Some(player) = squad.home().get(selected) else {
        return;
    };
    let color = role_color(player.role());
    let rect = layout.field_rect_to_surface(area);
    let line_w = (0.12 * layout.scale()).max(1.0);

    ops.push(SceneOp::FillRect {
        rect,
        color: color.with_alpha(0.18),
    });
    ops.push(SceneOp::StrokeRect {
        rect,
        width: line_w,
        color: color.with_alpha(0.9),
    });
}
