//! Per-instance configuration: behaviour flags and styles.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    style::{Color, Style},
};

/// The styles a list paints with. Every control owns its own copy, so two
/// lists on screen can look different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListStyles {
    /// Main text of every top-level entry.
    pub main_text: Style,
    /// Secondary text, and the text of sub-items.
    pub secondary_text: Style,
    /// The `(c)` shortcut glyph in the gutter.
    pub shortcut: Style,
    /// The highlight applied to the selected row.
    pub selected: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let base = Style::default();
        Self {
            main_text: base.fg(Color::White),
            secondary_text: base.fg(Color::Green),
            shortcut: base.fg(Color::Yellow),
            selected: base.fg(Color::Black).bg(Color::White),
        }
    }
}

/// Behaviour and appearance of a [`DeepList`](crate::DeepList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Show each top-level entry's secondary text on a second line.
    pub show_secondary_text: bool,
    /// Moving past either end of the list wraps to the other end.
    pub wrap_around: bool,
    /// Only highlight the selection while the list has focus.
    pub selected_focus_only: bool,
    /// Highlight the full row width instead of just the printed text.
    pub highlight_full_line: bool,
    /// Colors and attributes.
    pub styles: ListStyles,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            show_secondary_text: true,
            wrap_around: true,
            selected_focus_only: false,
            highlight_full_line: false,
            styles: ListStyles::default(),
        }
    }
}

impl ListConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Set whether secondary text is shown.
    pub fn with_secondary_text(mut self, show: bool) -> Self {
        self.show_secondary_text = show;
        self
    }

    /// Set whether navigation wraps around.
    pub fn with_wrap_around(mut self, wrap: bool) -> Self {
        self.wrap_around = wrap;
        self
    }

    /// Set whether the selection is only highlighted with focus.
    pub fn with_selected_focus_only(mut self, focus_only: bool) -> Self {
        self.selected_focus_only = focus_only;
        self
    }

    /// Set whether the highlight spans the full row.
    pub fn with_highlight_full_line(mut self, full: bool) -> Self {
        self.highlight_full_line = full;
        self
    }

    /// Replace the styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let c = ListConfig::from_json(r#"{"wrap_around": false}"#).unwrap();
        assert!(!c.wrap_around);
        assert!(c.show_secondary_text);
        assert_eq!(c.styles, ListStyles::default());
    }

    #[test]
    fn styles_from_json() {
        let c = ListConfig::from_json(
            r#"{"styles": {"selected": {"fg": "white", "bg": {"rgb": {"r": 1, "g": 2, "b": 3}}}}}"#,
        )
        .unwrap();
        assert_eq!(c.styles.selected.bg, Color::Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(c.styles.main_text, ListStyles::default().main_text);
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(
            ListConfig::from_json("{"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ListConfig::load("/nonexistent/deeplist.json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn round_trip() {
        let c = ListConfig::default()
            .with_wrap_around(false)
            .with_highlight_full_line(true);
        let s = serde_json::to_string(&c).unwrap();
        assert_eq!(ListConfig::from_json(&s).unwrap(), c);
    }
}
