//! Colors, text attributes and cell styles.

use serde::{Deserialize, Serialize};

/// A terminal color value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Black.
    Black,
    /// Dark grey.
    DarkGrey,
    /// Red.
    Red,
    /// Dark red.
    DarkRed,
    /// Green.
    Green,
    /// Dark green.
    DarkGreen,
    /// Yellow.
    Yellow,
    /// Dark yellow.
    DarkYellow,
    /// Blue.
    Blue,
    /// Dark blue.
    DarkBlue,
    /// Magenta.
    Magenta,
    /// Dark magenta.
    DarkMagenta,
    /// Cyan.
    Cyan,
    /// Dark cyan.
    DarkCyan,
    /// White.
    White,
    /// Grey.
    Grey,
    /// RGB color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// An ANSI color from the 256 color palette.
    AnsiValue(u8),
}

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Underline flag.
    pub underline: bool,
}

impl AttrSet {
    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.dim || self.italic || self.underline)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Underline => self.underline = true,
        };
        self
    }
}

/// A fully specified cell style.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text attributes.
    #[serde(default)]
    pub attrs: AttrSet,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            attrs: AttrSet::default(),
        }
    }
}

impl Style {
    /// A copy of this style with a different foreground.
    pub fn fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    /// A copy of this style with a different background.
    pub fn bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    /// A copy of this style with an added attribute.
    pub fn with_attr(self, attr: Attr) -> Self {
        Self {
            attrs: self.attrs.with(attr),
            ..self
        }
    }
}

/// A partial style used for matching in tests. Unset fields match anything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartialStyle {
    /// Foreground to match.
    pub fg: Option<Color>,
    /// Background to match.
    pub bg: Option<Color>,
}

impl PartialStyle {
    /// Match on foreground only.
    pub fn fg(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
        }
    }

    /// Match on background only.
    pub fn bg(bg: Color) -> Self {
        Self {
            fg: None,
            bg: Some(bg),
        }
    }

    /// Does the style satisfy this partial style?
    pub fn matches(&self, style: &Style) -> bool {
        self.fg.is_none_or(|fg| fg == style.fg) && self.bg.is_none_or(|bg| bg == style.bg)
    }
}
