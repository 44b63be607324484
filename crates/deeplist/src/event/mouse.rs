//! Mouse input primitives.

use crate::{event::key, geom::Point};

/// Mouse button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
    /// No button (for move/scroll).
    None,
}

/// Mouse action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
    /// Mouse drag with button held.
    Drag,
    /// Mouse moved without button.
    Moved,
    /// Scroll wheel down.
    ScrollDown,
    /// Scroll wheel up.
    ScrollUp,
    /// Horizontal scroll left.
    ScrollLeft,
    /// Horizontal scroll right.
    ScrollRight,
}

/// A mouse input event with its location in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Mouse action type.
    pub action: Action,
    /// Mouse button.
    pub button: Button,
    /// Keyboard modifiers.
    pub modifiers: key::Mods,
    /// Cursor location in screen space.
    pub location: Point,
}

impl MouseEvent {
    /// A plain left click at a location.
    pub fn click(location: impl Into<Point>) -> Self {
        Self {
            action: Action::Down,
            button: Button::Left,
            modifiers: key::Empty,
            location: location.into(),
        }
    }

    /// A button-less event, typically a scroll, at a location.
    pub fn at(action: Action, location: impl Into<Point>) -> Self {
        Self {
            action,
            button: Button::None,
            modifiers: key::Empty,
            location: location.into(),
        }
    }

    /// Is this a left-button press?
    pub fn is_left_click(&self) -> bool {
        self.action == Action::Down && self.button == Button::Left
    }
}
