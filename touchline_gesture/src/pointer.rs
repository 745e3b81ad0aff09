// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input primitives.
//!
//! These types are the only input surface the board core knows about. The
//! host adapts its windowing toolkit's events into [`PointerEvent`]s in
//! surface coordinates; the core never sees the native event types.

use kurbo::Point;

/// Which pointer button an event refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum PointerButton {
    /// The primary button (left mouse button, touch contact).
    #[default]
    Primary,
    /// The secondary button (right mouse button).
    Secondary,
    /// The auxiliary button (middle mouse button).
    Auxiliary,
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control key.
        const CONTROL = 0b0000_0001;
        /// Shift key.
        const SHIFT = 0b0000_0010;
        /// Alt/Option key.
        const ALT = 0b0000_0100;
        /// Meta/Command key.
        const META = 0b0000_1000;
    }
}

/// One pointer event in surface coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position on the drawing surface, in pixels.
    pub pos: Point,
    /// The button this event refers to (for down/up events).
    pub button: PointerButton,
    /// Modifiers held at event time.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A primary-button event with no modifiers.
    #[must_use]
    pub fn primary(pos: Point) -> Self {
        Self {
            pos,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns this event with the given modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Pointer cursor feedback derived from the interaction state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Cursor {
    /// Nothing interactive under the pointer.
    #[default]
    Default,
    /// An entity is under the pointer.
    Pointer,
    /// A drag is in progress.
    Grabbing,
}
