// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchline Gesture: the pointer interaction state machine of the board.
//!
//! This crate turns raw pointer events into entity-model mutations and host
//! effects. The heart of it is [`GestureController`], a small explicit state
//! machine with four phases:
//!
//! - `Idle`: nothing in flight; moves only track hover.
//! - `Pending`: a home player was pressed; we do not yet know whether this
//!   becomes a drag (movement past a 6 px threshold) or a long-press
//!   (600 ms without movement, opening the naming affordance).
//! - `DragPlayer`: a player follows the pointer through the inverse
//!   coordinate mapping; an attached ball is carried along.
//! - `DragBall`: the ball follows the pointer directly. Picking the ball up
//!   always detaches it first; releasing it near a player re-attaches at the
//!   current offset.
//!
//! Away players skip the pending phase and drag immediately: only home
//! players can be named, so only they need long-press disambiguation.
//!
//! ## Host contract
//!
//! The controller is headless and single-threaded. Every handler returns a
//! list of [`Effect`]s the host must honor: redraw requests, long-press
//! timer arm/cancel, and naming-affordance open/close. Timers are owned by
//! the host; the controller hands out a fresh [`TimerToken`] per arm and
//! ignores callbacks for any token it no longer expects, so a late timer
//! cannot resurrect a finished gesture. At most one timer is outstanding at
//! a time.
//!
//! Durable state (rosters, ball, zone marks) stays in `touchline_squad`; the
//! controller only holds what a single gesture needs, plus the current
//! selection and hover, which outlive gestures but never the roster.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use touchline_gesture::{BoardCtx, GestureController, PointerEvent};
//! use touchline_pitch::PitchLayout;
//! use touchline_squad::{Squad, ZoneMap};
//!
//! let layout = PitchLayout::compute(Size::new(800.0, 600.0)).unwrap();
//! let mut squad = Squad::new();
//! let mut zones = ZoneMap::new();
//! let mut gestures = GestureController::new();
//!
//! let mut ctx = BoardCtx {
//!     layout: &layout,
//!     squad: &mut squad,
//!     zones: &mut zones,
//!     zones_visible: false,
//!     areas_visible: false,
//! };
//!
//! // Press on the goalkeeper: the player becomes selected and a long-press
//! // timer is armed.
//! let gk_px = layout.field_to_surface(Point::new(8.0, 34.0));
//! gestures.on_pointer_down(&mut ctx, &PointerEvent::primary(gk_px));
//! assert_eq!(gestures.selected(), Some(0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod pointer;

pub use controller::{
    BoardCtx, Effect, Effects, GestureController, LONG_PRESS_MS, MOVE_THRESHOLD_PX, TimerToken,
};
pub use pointer::{Cursor, Modifiers, PointerButton, PointerEvent};
