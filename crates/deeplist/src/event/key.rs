//! Keyboard input primitives.
use std::ops::Add;

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt-only modifier state.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

/// Logical key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up key.
    PageUp,
    /// Page down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift + Tab key.
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// F key.
    ///
    /// `KeyCode::F(1)` represents F1 key, etc.
    F(u8),
    /// A character.
    Char(char),
    /// Any key we have no use for.
    Null,
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// A keystroke along with modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// Normalize a keystroke for matching.
    ///
    /// Terminals report "shift + A" for an uppercase A, while callers think of
    /// the key simply as "A". If shift is present:
    ///
    /// | input             | normalization    |
    /// |-------------------|------------------|
    /// | shift + a         | A                |
    /// | shift + )         | )                |
    /// | shift + space     | shift + space    |
    /// | shift + tab       | backtab          |
    /// | shift + enter     | shift + enter    |
    pub fn normalize(&self) -> Self {
        if !self.mods.shift {
            return *self;
        }
        let unshifted = Mods {
            shift: false,
            ..self.mods
        };
        match self.key {
            KeyCode::Char(' ') => *self,
            KeyCode::Char(c) if c.is_ascii_lowercase() => Self {
                mods: unshifted,
                key: KeyCode::Char(c.to_ascii_uppercase()),
            },
            KeyCode::Char(_) => Self {
                mods: unshifted,
                key: self.key,
            },
            KeyCode::Tab | KeyCode::BackTab => Self {
                mods: unshifted,
                key: KeyCode::BackTab,
            },
            _ => *self,
        }
    }

    /// The character this key types, if it is a plain printable character.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if !self.mods.ctrl && !self.mods.alt && !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        // If there are modifiers, we never match.
        if self.mods != Empty {
            return false;
        }
        *c == self.key
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: KeyCode::Char(c),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self {
            mods: Empty,
            key: c,
        }
    }
}
