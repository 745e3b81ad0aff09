// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use touchline_hit::{EntityRef, attach_candidate, hit_test, hit_test_zone};
use touchline_pitch::PitchLayout;
use touchline_squad::{PlayerRef, Squad, Team, ZoneMap};

use crate::pointer::{Cursor, Modifiers, PointerButton, PointerEvent};

/// Long-press duration the host must schedule for an armed timer.
pub const LONG_PRESS_MS: u64 = 600;

/// Pointer travel (in pixels) past which a pending press becomes a drag.
pub const MOVE_THRESHOLD_PX: f64 = 6.0;

/// Vertical gap between a marker's edge and the naming-affordance anchor.
const PICKER_GAP_PX: f64 = 10.0;

/// Handle of one armed long-press timer.
///
/// Tokens are issued fresh for every arm and never reused, so a callback
/// carrying a stale token identifies itself and is ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerToken(u64);

/// Side effects the host must honor after a handler call.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// State changed; repaint the surface.
    Redraw,
    /// Schedule a [`LONG_PRESS_MS`] timer and call
    /// [`GestureController::on_long_press`] with this token when it fires.
    ArmLongPress(TimerToken),
    /// Discard the timer previously armed with this token.
    CancelLongPress(TimerToken),
    /// Open the naming affordance for a home player, anchored just below its
    /// marker in surface coordinates.
    OpenNamePicker {
        /// Home-roster index of the player being named.
        player: usize,
        /// Anchor point for the affordance, in surface pixels.
        anchor: Point,
    },
    /// Close the naming affordance if it is open.
    CloseNamePicker,
}

/// Effect list returned by every handler.
pub type Effects = SmallVec<[Effect; 4]>;

/// Everything a gesture handler may read or mutate.
///
/// The controller does not own any durable state; the board lends it the
/// current layout, the entity model, the zone map, and the overlay gates for
/// the duration of one handler call.
#[derive(Debug)]
pub struct BoardCtx<'a> {
    /// Current surface layout. Callers must not invoke handlers without one.
    pub layout: &'a PitchLayout,
    /// The entity model.
    pub squad: &'a mut Squad,
    /// Zone annotation state.
    pub zones: &'a mut ZoneMap,
    /// Whether the zone overlay is active (gates zone toggling).
    pub zones_visible: bool,
    /// Whether the responsibility overlay is active (gates deselection).
    pub areas_visible: bool,
}

/// Current phase of the interaction state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Pending {
        player: usize,
        down: Point,
        timer: TimerToken,
        fired: bool,
    },
    DragPlayer(PlayerRef),
    DragBall,
}

/// The pointer interaction state machine.
///
/// See the crate documentation for the transition table. Besides the phase
/// itself the controller tracks the selected home player (which drives the
/// responsibility overlay and survives across gestures) and the hovered
/// entity (cursor feedback only).
#[derive(Debug)]
pub struct GestureController {
    phase: Phase,
    hover: Option<EntityRef>,
    selected: Option<usize>,
    next_timer: u64,
    deselect_requires_overlay: bool,
}

impl GestureController {
    /// Creates an idle controller.
    ///
    /// By default an empty-space click deselects only while the
    /// responsibility overlay is shown; see
    /// [`GestureController::set_deselect_requires_overlay`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            hover: None,
            selected: None,
            next_timer: 0,
            deselect_requires_overlay: true,
        }
    }

    /// Controls whether empty-space deselection requires the responsibility
    /// overlay to be active.
    pub fn set_deselect_requires_overlay(&mut self, required: bool) {
        self.deselect_requires_overlay = required;
    }

    /// The selected home player, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The entity currently under the pointer, if any.
    #[must_use]
    pub fn hover(&self) -> Option<EntityRef> {
        self.hover
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::DragPlayer(_) | Phase::DragBall)
    }

    /// Cursor feedback for the current state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else if self.hover.is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }

    /// Handles a pointer press.
    pub fn on_pointer_down(&mut self, ctx: &mut BoardCtx<'_>, ev: &PointerEvent) -> Effects {
        let mut fx = Effects::new();
        if ev.button != PointerButton::Primary {
            return fx;
        }
        match self.phase {
            // With pointer capture a second press mid-drag should not occur;
            // ignore it rather than corrupt the drag.
            Phase::DragPlayer(_) | Phase::DragBall => return fx,
            // A new press supersedes an unresolved pending gesture.
            Phase::Pending { timer, fired, .. } => {
                if !fired {
                    fx.push(Effect::CancelLongPress(timer));
                }
                self.phase = Phase::Idle;
            }
            Phase::Idle => {}
        }

        match hit_test(ctx.layout, ctx.squad, ev.pos) {
            Some(EntityRef::Ball) => {
                // Direct ball control always detaches.
                ctx.squad.detach_ball();
                self.phase = Phase::DragBall;
                fx.push(Effect::Redraw);
            }
            Some(EntityRef::Player(p)) if p.team == Team::Away => {
                self.phase = Phase::DragPlayer(p);
            }
            Some(EntityRef::Player(p)) => {
                let timer = self.issue_timer();
                self.selected = Some(p.index);
                self.phase = Phase::Pending {
                    player: p.index,
                    down: ev.pos,
                    timer,
                    fired: false,
                };
                fx.push(Effect::ArmLongPress(timer));
                fx.push(Effect::Redraw);
            }
            None => {
                if ctx.zones_visible {
                    if let Some(zone) = hit_test_zone(ctx.layout, ev.pos) {
                        if ev.modifiers.contains(Modifiers::CONTROL) {
                            ctx.zones.toggle_flag(zone);
                        } else {
                            ctx.zones.toggle_primary(zone);
                        }
                        fx.push(Effect::Redraw);
                        return fx;
                    }
                }
                fx.push(Effect::CloseNamePicker);
                if self.selected.is_some()
                    && (ctx.areas_visible || !self.deselect_requires_overlay)
                {
                    self.selected = None;
                    fx.push(Effect::Redraw);
                }
            }
        }
        fx
    }

    /// Handles pointer movement.
    pub fn on_pointer_move(&mut self, ctx: &mut BoardCtx<'_>, ev: &PointerEvent) -> Effects {
        let mut fx = Effects::new();
        match self.phase {
            Phase::DragBall => {
                ctx.squad.move_ball(ctx.layout.surface_to_field(ev.pos));
                fx.push(Effect::Redraw);
            }
            Phase::DragPlayer(p) => {
                ctx.squad.move_player(p, ctx.layout.surface_to_field(ev.pos));
                fx.push(Effect::Redraw);
            }
            Phase::Pending {
                player,
                down,
                timer,
                fired,
            } => {
                if exceeds_threshold(ev.pos - down) {
                    if !fired {
                        fx.push(Effect::CancelLongPress(timer));
                    }
                    self.phase = Phase::DragPlayer(PlayerRef::home(player));
                } else {
                    self.hover = hit_test(ctx.layout, ctx.squad, ev.pos);
                }
            }
            Phase::Idle => {
                self.hover = hit_test(ctx.layout, ctx.squad, ev.pos);
            }
        }
        fx
    }

    /// Handles pointer release.
    pub fn on_pointer_up(&mut self, ctx: &mut BoardCtx<'_>, _ev: &PointerEvent) -> Effects {
        let mut fx = Effects::new();
        match self.phase {
            Phase::DragBall => {
                // Releasing the ball on a player attaches it at the current
                // offset so it does not jump.
                if let Some(candidate) = attach_candidate(ctx.layout, ctx.squad) {
                    ctx.squad.attach_ball_to(candidate);
                }
            }
            Phase::DragPlayer(_) => {}
            Phase::Pending { timer, fired, .. } => {
                if !fired {
                    fx.push(Effect::CancelLongPress(timer));
                }
            }
            Phase::Idle => {}
        }
        self.phase = Phase::Idle;
        fx
    }

    /// Handles pointer cancellation; equivalent to a release without an
    /// attachment-relevant position change.
    pub fn on_pointer_cancel(&mut self, ctx: &mut BoardCtx<'_>, ev: &PointerEvent) -> Effects {
        self.on_pointer_up(ctx, ev)
    }

    /// Handles the host's long-press timer callback.
    ///
    /// A token that does not match the currently armed timer is stale and
    /// ignored; so is a callback arriving in any phase but `Pending`.
    pub fn on_long_press(&mut self, ctx: &mut BoardCtx<'_>, token: TimerToken) -> Effects {
        let mut fx = Effects::new();
        if let Phase::Pending {
            player,
            timer,
            fired,
            ..
        } = &mut self.phase
        {
            if *timer == token && !*fired {
                if let Some(p) = ctx.squad.home().get(*player) {
                    *fired = true;
                    let center = ctx.layout.field_to_surface(p.position());
                    let anchor = Point::new(
                        center.x,
                        center.y + ctx.layout.marker_radius() + PICKER_GAP_PX,
                    );
                    fx.push(Effect::OpenNamePicker {
                        player: *player,
                        anchor,
                    });
                }
            }
        }
        fx
    }

    /// External reset: aborts any gesture in flight and cancels a pending
    /// timer. Used on surface resize. Selection and hover are kept.
    pub fn reset(&mut self) -> Effects {
        let mut fx = Effects::new();
        if let Phase::Pending { timer, fired, .. } = self.phase {
            if !fired {
                fx.push(Effect::CancelLongPress(timer));
            }
        }
        self.phase = Phase::Idle;
        fx
    }

    /// Clears selection and hover. Used when the roster they index into is
    /// replaced by a formation change.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.hover = None;
    }

    fn issue_timer(&mut self) -> TimerToken {
        let token = TimerToken(self.next_timer);
        self.next_timer += 1;
        token
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

fn exceeds_threshold(delta: Vec2) -> bool {
    delta.hypot2() > MOVE_THRESHOLD_PX * MOVE_THRESHOLD_PX
}
