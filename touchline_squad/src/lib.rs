// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchline Squad: the entity model of the tactics board.
//!
//! This crate owns every piece of durable board state: the home roster with
//! roles and name assignments, the away markers, the ball with its optional
//! player attachment, and the 18-cell zone annotation map. Everything is
//! expressed in field-metric coordinates (meters); nothing here knows about
//! surfaces, pixels, or input devices.
//!
//! The central type is [`Squad`]. Its mutators are the only way to change
//! entity state, which is what upholds the model invariants:
//!
//! - A non-empty name is held by at most one home player at a time;
//!   [`Squad::assign_name`] clears it from any previous holder.
//! - While the ball is attached to a player, [`Squad::move_player`] carries
//!   the ball along at a fixed metric offset. Direct ball control always
//!   detaches first (the gesture layer calls [`Squad::detach_ball`] on
//!   pickup).
//! - [`Squad::apply_formation`] replaces the whole home roster from a
//!   preset, clearing all name assignments, and re-resolves the ball
//!   attachment against the new roster (silently detaching when the
//!   attached index no longer exists).
//!
//! Formation presets and the candidate name catalog are static
//! configuration, exposed as [`FORMATIONS`] / [`formation`] and [`ROSTER`].
//!
//! Zone annotations live in [`ZoneMap`], keyed by
//! [`ZoneId`](touchline_pitch::ZoneId) from `touchline_pitch`. Cell state is
//! a pair of independent mark bits ([`ZoneMarks`]), created lazily on first
//! toggle and only ever cleared by an explicit toggle back to zero.
//!
//! Role-derived "area of responsibility" rectangles are computed by
//! [`responsibility_rect`] as a pure function of the current squad; they are
//! never cached, because midfield rectangles depend on live sibling
//! positions that change under drag.
//!
//! ## Example
//!
//! ```rust
//! use touchline_squad::{Squad, formation};
//!
//! let mut squad = Squad::new();
//! squad.assign_name(0, Some("Knox"));
//! assert_eq!(squad.home()[0].name(), Some("Knox"));
//!
//! // Applying a formation replaces the roster and clears all names.
//! squad.apply_formation(formation("3-2-3").unwrap());
//! assert!(squad.home().iter().all(|p| p.name().is_none()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod formation;
mod responsibility;
mod roster;
mod squad;
mod zones;

pub use formation::{
    AWAY_LAYOUT, AwaySlot, DEFAULT_FORMATION, FORMATIONS, Formation, FormationSlot, formation,
};
pub use responsibility::responsibility_rect;
pub use roster::ROSTER;
pub use squad::{Attachment, AwayPlayer, Ball, HomePlayer, PlayerRef, Role, Squad, Team};
pub use zones::{ZoneMap, ZoneMarks};
