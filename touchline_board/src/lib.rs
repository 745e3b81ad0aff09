// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchline Board: the owning controller of the tactics board.
//!
//! [`Board`] ties the Touchline crates together behind the surface a host
//! embeds: it owns the entity model, the zone annotations, the current
//! layout, and the gesture controller, and exposes plain handlers for the
//! host's resize, pointer, and timer callbacks. There is no ambient state
//! anywhere; dropping the board drops the whole application state.
//!
//! ## Host integration
//!
//! The host owns the window, the input loop, the long-press timer, the name
//! picker widget, and the ball image. The board tells it what to do through
//! [`BoardEvent`]s returned from every handler:
//!
//! - [`BoardEvent::Redraw`]: repaint now, synchronously, by replaying
//!   [`Board::scene`].
//! - [`BoardEvent::ArmLongPress`] / [`BoardEvent::CancelLongPress`]:
//!   schedule or discard a [`LONG_PRESS_MS`] one-shot timer that calls back
//!   [`Board::on_long_press`] with the given token.
//! - [`BoardEvent::OpenNamePicker`] / [`BoardEvent::CloseNamePicker`]: show
//!   or hide the naming affordance. The event carries the anchor, the
//!   current assignment, and the candidate name catalog; the host renders
//!   the widget and reports the choice back through
//!   [`Board::on_name_chosen`].
//!
//! Until the first successful [`Board::on_resize`] there is no layout, and
//! pointer input and frame building are skipped wholesale. The ball image is
//! loaded by the host once; [`Board::on_ball_image_ready`] switches the ball
//! from the procedural fallback to the image and
//! [`Board::on_ball_image_failed`] keeps the fallback for good. Neither is
//! ever an error.
//!
//! ```rust
//! use kurbo::Size;
//! use touchline_board::{Board, BoardEvent};
//!
//! let mut board = Board::new();
//! let events = board.on_resize(Size::new(800.0, 600.0));
//! assert!(events.contains(&BoardEvent::Redraw));
//! assert!(!board.scene().is_empty());
//! ```

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Point, Size};
use touchline_gesture::{BoardCtx, Effect, Effects, GestureController};
use touchline_pitch::PitchLayout;
use touchline_scene::SceneOptions;
use touchline_squad::{ROSTER, Squad, ZoneMap, formation};

pub use kurbo;
pub use touchline_gesture::{
    Cursor, LONG_PRESS_MS, MOVE_THRESHOLD_PX, Modifiers, PointerButton, PointerEvent, TimerToken,
};
pub use touchline_hit::EntityRef;
pub use touchline_pitch::{FIELD_LENGTH, FIELD_WIDTH, ZoneId};
pub use touchline_scene::{SceneOp, TextAnchor};
pub use touchline_squad::{PlayerRef, Role, Team, ZoneMarks};

/// Instructions to the host, returned from every mutating handler.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    /// Repaint the surface from [`Board::scene`] now.
    Redraw,
    /// Schedule a [`LONG_PRESS_MS`] one-shot timer for this token.
    ArmLongPress(TimerToken),
    /// Discard the timer scheduled for this token.
    CancelLongPress(TimerToken),
    /// Show the naming affordance.
    OpenNamePicker {
        /// Home-roster index being named.
        player: usize,
        /// Anchor point in surface pixels, just below the marker.
        anchor: Point,
        /// The player's current name, if any.
        current: Option<String>,
        /// The candidate name catalog to offer.
        choices: &'static [&'static str],
    },
    /// Hide the naming affordance if it is open.
    CloseNamePicker,
}

/// Load state of the host-provided ball image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum BallImage {
    Loading,
    Ready,
    Failed,
}

/// The tactics board.
///
/// See the crate documentation for the host contract.
#[derive(Debug)]
pub struct Board {
    squad: Squad,
    zones: ZoneMap,
    layout: Option<PitchLayout>,
    gestures: GestureController,
    show_zones: bool,
    show_areas: bool,
    ball_image: BallImage,
}

impl Board {
    /// Creates a board with the default formation and both overlays off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            squad: Squad::new(),
            zones: ZoneMap::new(),
            layout: None,
            gestures: GestureController::new(),
            show_zones: false,
            show_areas: false,
            ball_image: BallImage::Loading,
        }
    }

    /// Read access to the entity model.
    #[must_use]
    pub fn squad(&self) -> &Squad {
        &self.squad
    }

    /// Read access to the zone annotations.
    #[must_use]
    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    /// The current layout, if the surface has been sized.
    #[must_use]
    pub fn layout(&self) -> Option<&PitchLayout> {
        self.layout.as_ref()
    }

    /// The selected home player, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.gestures.selected()
    }

    /// Cursor feedback for the current interaction state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.gestures.cursor()
    }

    /// The entity under the pointer, if any (tracked on pointer moves).
    #[must_use]
    pub fn hover(&self) -> Option<EntityRef> {
        self.gestures.hover()
    }

    /// Roster names not assigned to any player: the substitutes list.
    #[must_use]
    pub fn unassigned_names(&self) -> Vec<&'static str> {
        self.squad.unassigned_names()
    }

    /// Controls whether an empty-space click deselects only while the
    /// responsibility overlay is shown (the default) or always.
    pub fn set_deselect_requires_overlay(&mut self, required: bool) {
        self.gestures.set_deselect_requires_overlay(required);
    }

    /// Handles a surface resize.
    ///
    /// Recomputes the layout (degenerate sizes leave the board without one,
    /// which disables input and painting), aborts any gesture in flight, and
    /// closes the naming affordance, whose anchor is now stale.
    pub fn on_resize(&mut self, surface: Size) -> Vec<BoardEvent> {
        self.layout = PitchLayout::compute(surface);
        let fx = self.gestures.reset();
        let mut events = self.lift(fx);
        events.push(BoardEvent::CloseNamePicker);
        if self.layout.is_some() {
            events.push(BoardEvent::Redraw);
        }
        events
    }

    /// Handles a pointer press.
    pub fn on_pointer_down(&mut self, ev: &PointerEvent) -> Vec<BoardEvent> {
        self.with_gestures(|gestures, ctx| gestures.on_pointer_down(ctx, ev))
    }

    /// Handles pointer movement.
    pub fn on_pointer_move(&mut self, ev: &PointerEvent) -> Vec<BoardEvent> {
        self.with_gestures(|gestures, ctx| gestures.on_pointer_move(ctx, ev))
    }

    /// Handles a pointer release.
    pub fn on_pointer_up(&mut self, ev: &PointerEvent) -> Vec<BoardEvent> {
        self.with_gestures(|gestures, ctx| gestures.on_pointer_up(ctx, ev))
    }

    /// Handles pointer cancellation.
    pub fn on_pointer_cancel(&mut self, ev: &PointerEvent) -> Vec<BoardEvent> {
        self.with_gestures(|gestures, ctx| gestures.on_pointer_cancel(ctx, ev))
    }

    /// Handles the host's long-press timer callback.
    pub fn on_long_press(&mut self, token: TimerToken) -> Vec<BoardEvent> {
        self.with_gestures(|gestures, ctx| gestures.on_long_press(ctx, token))
    }

    /// Applies the naming affordance's choice to the selected player.
    ///
    /// `None` (or an empty string) clears the assignment. Without a live
    /// selection the choice is dropped; either way the affordance closes.
    pub fn on_name_chosen(&mut self, name: Option<&str>) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if let Some(index) = self.gestures.selected() {
            self.squad.assign_name(index, name);
            events.push(BoardEvent::Redraw);
        }
        events.push(BoardEvent::CloseNamePicker);
        events
    }

    /// Replaces the home roster with a named formation preset.
    ///
    /// Clears all name assignments and the selection, aborts any gesture in
    /// flight, and re-resolves the ball attachment (see
    /// [`Squad::apply_formation`](touchline_squad::Squad::apply_formation)).
    /// An unknown name changes nothing and returns no events.
    pub fn apply_formation(&mut self, name: &str) -> Vec<BoardEvent> {
        let Some(preset) = formation(name) else {
            log::warn!("unknown formation {name:?}");
            return Vec::new();
        };
        self.squad.apply_formation(preset);
        self.gestures.clear_selection();
        let fx = self.gestures.reset();
        let mut events = self.lift(fx);
        events.push(BoardEvent::CloseNamePicker);
        events.push(BoardEvent::Redraw);
        log::debug!("formation {name} applied");
        events
    }

    /// Shows or hides the zone overlay.
    pub fn set_show_zones(&mut self, show: bool) -> Vec<BoardEvent> {
        self.show_zones = show;
        vec![BoardEvent::Redraw]
    }

    /// Shows or hides the responsibility overlay.
    pub fn set_show_areas(&mut self, show: bool) -> Vec<BoardEvent> {
        self.show_areas = show;
        vec![BoardEvent::Redraw]
    }

    /// Reports that the host finished loading the ball image.
    ///
    /// Fire-once: repeated or late reports after a failure are ignored.
    pub fn on_ball_image_ready(&mut self) -> Vec<BoardEvent> {
        if self.ball_image != BallImage::Loading {
            return Vec::new();
        }
        self.ball_image = BallImage::Ready;
        vec![BoardEvent::Redraw]
    }

    /// Reports that the ball image failed to load.
    ///
    /// The ball keeps its procedural rendering; this is not an error and no
    /// retry is attempted.
    pub fn on_ball_image_failed(&mut self) -> Vec<BoardEvent> {
        if self.ball_image == BallImage::Loading {
            self.ball_image = BallImage::Failed;
            log::debug!("ball image unavailable, keeping procedural rendering");
        }
        Vec::new()
    }

    /// Builds the current frame as a display list.
    ///
    /// Empty until the surface has been sized. The list is rebuilt from live
    /// state on every call; nothing is cached between frames.
    #[must_use]
    pub fn scene(&self) -> Vec<SceneOp> {
        let Some(layout) = &self.layout else {
            return Vec::new();
        };
        let options = SceneOptions {
            zones_visible: self.show_zones,
            areas_visible: self.show_areas,
            selected: self.gestures.selected(),
            ball_image_loaded: self.ball_image == BallImage::Ready,
        };
        touchline_scene::build(layout, &self.squad, &self.zones, &options)
    }

    fn with_gestures(
        &mut self,
        f: impl FnOnce(&mut GestureController, &mut BoardCtx<'_>) -> Effects,
    ) -> Vec<BoardEvent> {
        let Some(layout) = &self.layout else {
            return Vec::new();
        };
        let mut ctx = BoardCtx {
            layout,
            squad: &mut self.squad,
            zones: &mut self.zones,
            zones_visible: self.show_zones,
            areas_visible: self.show_areas,
        };
        let fx = f(&mut self.gestures, &mut ctx);
        self.lift(fx)
    }

    fn lift(&self, fx: Effects) -> Vec<BoardEvent> {
        fx.into_iter()
            .map(|e| match e {
                Effect::Redraw => BoardEvent::Redraw,
                Effect::ArmLongPress(t) => BoardEvent::ArmLongPress(t),
                Effect::CancelLongPress(t) => BoardEvent::CancelLongPress(t),
                Effect::CloseNamePicker => BoardEvent::CloseNamePicker,
                Effect::OpenNamePicker { player, anchor } => BoardEvent::OpenNamePicker {
                    player,
                    anchor,
                    current: self
                        .squad
                        .home()
                        .get(player)
                        .and_then(|p| p.name())
                        .map(ToString::to_string),
                    choices: ROSTER,
                },
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
