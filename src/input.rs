//! Input model: mouse buttons, modifier keys, and the gesture state machine.
//!
//! This module defines the types consumed by the engine's pointer handlers.
//! `Button` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up, carrying the context needed to compute
//! incremental pan deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Pointer cursor requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Normal arrow cursor.
    #[default]
    Default,
    /// Closed-hand cursor shown while panning.
    Grabbing,
}

impl Cursor {
    /// CSS cursor keyword for the host to apply to the canvas element.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Internal state for the input state machine.
///
/// The only gesture is panning; everything else (seed placement) keys off
/// plain pointer movement and needs no per-gesture context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the plane view by dragging.
    Panning {
        /// Screen-space position of the previous pointer event, used to
        /// compute the pan delta.
        last_screen: Point,
    },
}
