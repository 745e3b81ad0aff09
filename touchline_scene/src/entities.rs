// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker and ball layers.

use alloc::string::ToString;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use touchline_pitch::PitchLayout;
use touchline_squad::Squad;

use crate::palette::{
    AWAY_FILL, BALL_FILL, BALL_RING, HOME_FILL, MARKER_RING, MARKER_TEXT, NAME_OUTLINE, NAME_TEXT,
    role_color,
};
use crate::{SceneOp, SceneOptions, TextAnchor};

pub(crate) fn paint_players(
    ops: &mut Vec<SceneOp>,
    layout: &PitchLayout,
    squad: &Squad,
    options: &SceneOptions,
) {
    let r = layout.marker_radius();
    let ring_w = (r * 0.18).max(1.0);
    let role_font = (r * 0.95).max(9.0);
    let label = layout.name_label_metrics();

    for (i, player) in squad.home().iter().enumerate() {
        let center = layout.field_to_surface(player.position());
        // The selected marker takes its area color while the overlay is on.
        let tinted = options.areas_visible && options.selected == Some(i);
        let fill = if tinted {
            role_color(player.role())
        } else {
            HOME_FILL
        };
        ops.push(SceneOp::FillCircle {
            center,
            radius: r,
            color: fill,
        });
        ops.push(SceneOp::StrokeCircle {
            center,
            radius: r,
            width: ring_w,
            color: MARKER_RING,
        });
        ops.push(SceneOp::Text {
            text: player.role().as_str().to_string(),
            origin: center,
            size_px: role_font,
            color: MARKER_TEXT,
            anchor: TextAnchor::Center,
            bold: true,
            outline: None,
        });
        if let Some(name) = player.name() {
            ops.push(SceneOp::Text {
                text: name.to_string(),
                origin: Point::new(center.x, center.y + label.top_offset),
                size_px: label.font_px,
                color: NAME_TEXT,
                anchor: TextAnchor::TopCenter,
                bold: false,
                outline: Some(NAME_OUTLINE),
            });
        }
    }

    for player in squad.away() {
        let center = layout.field_to_surface(player.position());
        ops.push(SceneOp::FillCircle {
            center,
            radius: r,
            color: AWAY_FILL,
        });
        ops.push(SceneOp::StrokeCircle {
            center,
            radius: r,
            width: ring_w,
            color: MARKER_RING,
        });
        if let Some(text) = player.label() {
            ops.push(SceneOp::Text {
                text: text.to_string(),
                origin: center,
                size_px: role_font,
                color: MARKER_TEXT,
                anchor: TextAnchor::Center,
                bold: true,
                outline: None,
            });
        }
    }
}

pub(crate) fn paint_ball(
    ops: &mut Vec<SceneOp>,
    layout: &PitchLayout,
    squad: &Squad,
    image_loaded: bool,
) {
    let center = layout.field_to_surface(squad.ball().position());
    let r = layout.ball_radius();
    if image_loaded {
        ops.push(SceneOp::BallImage {
            rect: Rect::new(center.x - r, center.y - r, center.x + r, center.y + r),
        });
    } else {
        ops.push(SceneOp::FillCircle {
            center,
            radius: r,
            color: BALL_FILL,
        });
        ops.push(SceneOp::StrokeCircle {
            center,
            radius: r,
            width: (r * 0.12).max(1.0),
            color: BALL_RING,
        });
    }
}
