// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pitch markings layer.
//!
//! All distances come from the laws of the game (in meters) and are scaled
//! through the layout: 9.15 m center circle and penalty arcs, 16.5 m × 40.32 m
//! penalty areas, 5.5 m × 18.32 m goal areas, penalty spots 11 m out, 1 m
//! corner arcs. The penalty boxes' field-side edges are aligned with the
//! outer zone-grid columns so the two overlays read as one scheme.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};
use touchline_pitch::{PitchLayout, ZONE_COLS};

use crate::SceneOp;
use crate::palette::PITCH_LINE;

const CENTER_CIRCLE_M: f64 = 9.15;
const PENALTY_WIDTH_M: f64 = 40.32;
const GOAL_AREA_DEPTH_M: f64 = 5.5;
const GOAL_AREA_WIDTH_M: f64 = 18.32;
const PENALTY_SPOT_M: f64 = 11.0;
const CORNER_RADIUS_M: f64 = 1.0;

pub(crate) fn paint(ops: &mut Vec<SceneOp>, layout: &PitchLayout) {
    let rect = layout.rect();
    let scale = layout.scale();
    let line_w = (0.12 * scale).max(1.0);
    let center = rect.center();

    // Boundary and halfway line.
    ops.push(SceneOp::StrokeRect {
        rect,
        width: line_w,
        color: PITCH_LINE,
    });
    ops.push(SceneOp::Line {
        p0: Point::new(center.x, rect.y0),
        p1: Point::new(center.x, rect.y1),
        width: line_w,
        color: PITCH_LINE,
    });

    // Center circle and kickoff spot.
    let spot_r = (line_w / 2.0).max(1.5);
    ops.push(SceneOp::StrokeCircle {
        center,
        radius: CENTER_CIRCLE_M * scale,
        width: line_w,
        color: PITCH_LINE,
    });
    ops.push(SceneOp::FillCircle {
        center,
        radius: spot_r,
        color: PITCH_LINE,
    });

    // Penalty areas, aligned with the outermost zone-grid columns.
    let zone_col_w = rect.width() / f64::from(ZONE_COLS);
    let left_box_x1 = rect.x0 + zone_col_w;
    let right_box_x0 = rect.x1 - zone_col_w;
    let penalty_y0 = center.y - PENALTY_WIDTH_M * scale / 2.0;
    let penalty_y1 = center.y + PENALTY_WIDTH_M * scale / 2.0;
    ops.push(SceneOp::StrokeRect {
        rect: Rect::new(rect.x0, penalty_y0, left_box_x1, penalty_y1),
        width: line_w,
        color: PITCH_LINE,
    });
    ops.push(SceneOp::StrokeRect {
        rect: Rect::new(right_box_x0, penalty_y0, rect.x1, penalty_y1),
        width: line_w,
        color: PITCH_LINE,
    });

    // Goal areas.
    let goal_depth = GOAL_AREA_DEPTH_M * scale;
    let goal_y0 = center.y - GOAL_AREA_WIDTH_M * scale / 2.0;
    let goal_y1 = center.y + GOAL_AREA_WIDTH_M * scale / 2.0;
    ops.push(SceneOp::StrokeRect {
        rect: Rect::new(rect.x0, goal_y0, rect.x0 + goal_depth, goal_y1),
        width: line_w,
        color: PITCH_LINE,
    });
    ops.push(SceneOp::StrokeRect {
        rect: Rect::new(rect.x1 - goal_depth, goal_y0, rect.x1, goal_y1),
        width: line_w,
        color: PITCH_LINE,
    });

    // Penalty spots.
    let left_spot = Point::new(rect.x0 + PENALTY_SPOT_M * scale, center.y);
    let right_spot = Point::new(rect.x1 - PENALTY_SPOT_M * scale, center.y);
    ops.push(SceneOp::FillCircle {
        center: left_spot,
        radius: spot_r,
        color: PITCH_LINE,
    });
    ops.push(SceneOp::FillCircle {
        center: right_spot,
        radius: spot_r,
        color: PITCH_LINE,
    });

    // Corner arcs, one quarter turn each.
    let corner_r = CORNER_RADIUS_M * scale;
    let corners = [
        (Point::new(rect.x0, rect.y0), 0.0),
        (Point::new(rect.x0, rect.y1), -FRAC_PI_2),
        (Point::new(rect.x1, rect.y0), FRAC_PI_2),
        (Point::new(rect.x1, rect.y1), PI),
    ];
    for (corner, start) in corners {
        ops.push(SceneOp::Arc {
            center: corner,
            radius: corner_r,
            start_angle: start,
            sweep_angle: FRAC_PI_2,
            width: line_w,
            color: PITCH_LINE,
        });
    }

    // Penalty arcs (the "D"), clipped at the penalty box edge.
    let arc_r = CENTER_CIRCLE_M * scale;
    let left_theta = ((left_box_x1 - left_spot.x) / arc_r).clamp(-1.0, 1.0).acos();
    ops.push(SceneOp::Arc {
        center: left_spot,
        radius: arc_r,
        start_angle: -left_theta,
        sweep_angle: 2.0 * left_theta,
        width: line_w,
        color: PITCH_LINE,
    });
    let right_theta = ((right_spot.x - right_box_x0) / arc_r).clamp(-1.0, 1.0).acos();
    ops.push(SceneOp::Arc {
        center: right_spot,
        radius: arc_r,
        start_angle: PI - right_theta,
        sweep_angle: 2.0 * right_theta,
        width: line_w,
        color: PITCH_LINE,
    });
}
