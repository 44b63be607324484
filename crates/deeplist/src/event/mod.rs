//! Input events delivered to the control.

pub mod key;
pub mod mouse;

use crate::geom::Expanse;

/// This enum represents all the event types a host loop feeds to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keystroke
    Key(key::Key),
    /// A mouse action
    Mouse(mouse::MouseEvent),
    /// Terminal resize
    Resize(Expanse),
    /// Terminal has gained focus
    FocusGained,
    /// Terminal has lost focus
    FocusLost,
}
