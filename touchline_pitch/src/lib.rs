// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchline Pitch: pitch-metric coordinate mapping and layout-derived metrics.
//!
//! This crate is the geometric foundation of the Touchline tactics board. It
//! models a regulation pitch in **field-metric coordinates** (meters on a
//! fixed 105 m × 68 m field, independent of display size) and converts
//! between that space and the pixels of a variable-size drawing surface.
//!
//! The central type is [`PitchLayout`], a snapshot of the surface-dependent
//! geometry:
//!
//! - The largest centered field rectangle that fits the surface at the exact
//!   metric aspect ratio, after a 5 %-of-min-dimension margin on each side.
//! - A single uniform meters→pixels scale factor (identical on both axes,
//!   which is what makes [`PitchLayout::field_to_surface`] and
//!   [`PitchLayout::surface_to_field`] exact inverses).
//! - Marker and ball radii derived from the field rectangle's width.
//! - The fixed 18-cell annotation grid (3 rows × 6 columns) over the field
//!   rectangle, addressed by [`ZoneId`].
//!
//! A layout is recomputed whenever the surface resizes; everything else in
//! the board (hit testing, gesture handling, painting) takes the current
//! layout as an input rather than caching pixel geometry of its own.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use touchline_pitch::{FIELD_LENGTH, FIELD_WIDTH, PitchLayout};
//!
//! let layout = PitchLayout::compute(Size::new(800.0, 600.0)).unwrap();
//!
//! // The kickoff spot maps to the center of the field rectangle.
//! let center = layout.field_to_surface(Point::new(FIELD_LENGTH / 2.0, FIELD_WIDTH / 2.0));
//! let back = layout.surface_to_field(center);
//! assert!((back.x - FIELD_LENGTH / 2.0).abs() < 1e-9);
//! assert!((back.y - FIELD_WIDTH / 2.0).abs() < 1e-9);
//! ```
//!
//! [`PitchLayout::compute`] returns `None` for a degenerate surface (zero or
//! negative extent). Callers are expected to skip hit testing and painting
//! until a valid layout exists.
//!
//! This crate is `no_std`.

#![no_std]

mod layout;
mod zones;

pub use layout::{NameLabelMetrics, PitchLayout};
pub use zones::{ZONE_COLS, ZONE_COUNT, ZONE_ROWS, ZoneId};

/// Field length in meters, touchline to touchline (the x axis).
pub const FIELD_LENGTH: f64 = 105.0;

/// Field width in meters, goal line to goal line (the y axis).
pub const FIELD_WIDTH: f64 = 68.0;
