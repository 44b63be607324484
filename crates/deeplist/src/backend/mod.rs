//! Output backends that render a buffer to a terminal.

/// Crossterm backend implementation.
pub mod crossterm;

use crate::{error::Result, geom::Point, style::Style};

/// A sink for styled text output, used to flush a [`TermBuf`](crate::TermBuf)
/// to a real terminal.
pub trait RenderBackend {
    /// Apply a style to the following text output
    fn style(&mut self, style: &Style) -> Result<()>;
    /// Output text to screen. This method is used for all text output.
    fn text(&mut self, loc: Point, txt: &str) -> Result<()>;
    /// Flush output to the terminal.
    fn flush(&mut self) -> Result<()>;
}
