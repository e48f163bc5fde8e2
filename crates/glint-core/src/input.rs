#![forbid(unsafe_code)]

//! Pointer-state snapshot.
//!
//! The toolkit core never reaches into an input manager; whoever drives a
//! frame samples the pointer once and passes the snapshot down. This keeps
//! the per-frame calls pure given their inputs.

use crate::geometry::Point;
use bitflags::bitflags;

bitflags! {
    /// Currently held pointer buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PointerButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

/// Pointer position and button state at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Screen-space pointer position.
    pub position: Point,
    pub buttons: PointerButtons,
}

impl PointerState {
    /// Snapshot with the given position and no buttons held.
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            buttons: PointerButtons::empty(),
        }
    }

    #[must_use]
    pub const fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    #[inline]
    pub fn is_pressed(&self, button: PointerButtons) -> bool {
        self.buttons.contains(button)
    }
}
