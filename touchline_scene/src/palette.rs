// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed colors of the board.

use peniko::Color;
use touchline_squad::Role;

/// Pitch markings.
pub(crate) const PITCH_LINE: Color = Color::from_rgb8(0xff, 0xff, 0xff);
/// Marker outline ring.
pub(crate) const MARKER_RING: Color = Color::from_rgb8(0x0e, 0x0e, 0x0e);
/// Home marker body.
pub(crate) const HOME_FILL: Color = Color::from_rgb8(0xff, 0xff, 0xff);
/// Away marker body.
pub(crate) const AWAY_FILL: Color = Color::from_rgb8(0xff, 0xb7, 0x4d);
/// Role text on markers.
pub(crate) const MARKER_TEXT: Color = Color::from_rgb8(0x11, 0x11, 0x11);
/// Name label fill.
pub(crate) const NAME_TEXT: Color = Color::from_rgb8(0xff, 0xff, 0xff);
/// Name label outline.
pub(crate) const NAME_OUTLINE: Color = Color::from_rgb8(0x00, 0x00, 0x00);
/// Highlighted zone fill.
pub(crate) const ZONE_HIGHLIGHT: Color = Color::from_rgb8(0x00, 0xe6, 0x76);
/// Flagged zone fill.
pub(crate) const ZONE_FLAG: Color = Color::from_rgb8(0xf4, 0x43, 0x36);
/// Flagged zone cross mark.
pub(crate) const ZONE_CROSS: Color = Color::from_rgb8(0xd3, 0x2f, 0x2f);
/// Ball body of the procedural fallback.
pub(crate) const BALL_FILL: Color = Color::from_rgb8(0xff, 0xff, 0xff);
/// Ball outline of the procedural fallback.
pub(crate) const BALL_RING: Color = Color::from_rgb8(0x11, 0x11, 0x11);

/// The accent color of a role, used for the responsibility overlay and the
/// selected marker tint.
#[must_use]
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Gk => Color::from_rgb8(0x00, 0xbc, 0xd4),
        Role::Ld | Role::Rd => Color::from_rgb8(0x21, 0x96, 0xf3),
        Role::Cd => Color::from_rgb8(0x8b, 0xc3, 0x4a),
        Role::Lm | Role::Rm => Color::from_rgb8(0xff, 0x70, 0x43),
        Role::Cm => Color::from_rgb8(0xff, 0xc1, 0x07),
        Role::Str => Color::from_rgb8(0xe9, 0x1e, 0x63),
        Role::Lw | Role::Rw => Color::from_rgb8(0x9e, 0x9e, 0x9e),
    }
}
