//! The painting surface a list draws onto.

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    backend::RenderBackend,
    error::Result,
    geom::{Expanse, Line, Point, Rect},
    style::Style,
    text::{self, Span},
};

/// NULL character constant.
const NULL: char = '\0';

/// A terminal cell with glyph and style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Base glyph character.
    pub ch: char,
    /// Additional grapheme characters stored with the base glyph.
    pub suffix: String,
    /// Style applied to the cell.
    pub style: Style,
    /// True when this cell continues a wide glyph from the previous column.
    pub continuation: bool,
}

impl Cell {
    /// Construct a cell containing a single glyph.
    pub fn new(ch: char, style: Style) -> Self {
        Self {
            ch,
            suffix: String::new(),
            style,
            continuation: false,
        }
    }

    /// Construct an empty cell.
    fn empty(style: Style) -> Self {
        Self::new(NULL, style)
    }

    /// Construct a cell from a grapheme cluster.
    fn grapheme(grapheme: &str, style: Style) -> Self {
        let mut chars = grapheme.chars();
        let ch = chars.next().unwrap_or(' ');
        Self {
            ch,
            suffix: chars.collect(),
            style,
            continuation: false,
        }
    }

    /// Construct a continuation cell for a wide glyph.
    fn continuation(style: Style) -> Self {
        Self {
            continuation: true,
            ..Self::empty(style)
        }
    }

    /// Return true when the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.ch == NULL && self.suffix.is_empty() && !self.continuation
    }

    /// Append this cell's renderable text to the output buffer.
    fn push_text(&self, out: &mut String) {
        if self.continuation {
            return;
        }
        if self.is_empty() {
            out.push(' ');
            return;
        }
        out.push(self.ch);
        out.push_str(&self.suffix);
    }
}

/// A grid of styled cells the render planner paints into.
///
/// Implementors only provide cell access; printing and filling are built on
/// top of it.
pub trait Canvas {
    /// Dimensions of the canvas.
    fn size(&self) -> Expanse;

    /// Read the cell at a point, if it lies on the canvas.
    fn cell(&self, p: Point) -> Option<&Cell>;

    /// Write a cell. Points off the canvas are ignored.
    fn set_cell(&mut self, p: Point, cell: Cell);

    /// Fill a rectangle with a glyph and style.
    fn fill(&mut self, style: Style, r: Rect, ch: char) {
        if let Some(isec) = self.size().rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.set_cell(Point { x, y }, Cell::new(ch, style));
                }
            }
        }
    }

    /// Replace the style of a cell, keeping its glyph.
    fn set_style(&mut self, p: Point, style: Style) {
        if let Some(cell) = self.cell(p) {
            let mut cell = cell.clone();
            cell.style = style;
            self.set_cell(p, cell);
        }
    }

    /// Print text into a line, skipping `skip` columns of the text first.
    ///
    /// Returns the visible span, which carries the printed width and whether
    /// the text was clipped by the right edge of the line. Cells to the right
    /// of the printed text are left untouched.
    fn print(&mut self, style: Style, l: Line, skip: usize, txt: &str) -> Span {
        let span = text::column_span(txt, skip, l.w as usize);
        let mut x = l.tl.x;
        for grapheme in txt[span.start..span.end].graphemes(true) {
            let width = text::grapheme_width(grapheme);
            self.set_cell(Point { x, y: l.tl.y }, Cell::grapheme(grapheme, style));
            for i in 1..width {
                self.set_cell(
                    Point {
                        x: x + i as u32,
                        y: l.tl.y,
                    },
                    Cell::continuation(style),
                );
            }
            x += width as u32;
        }
        span
    }
}

/// A 2D terminal buffer of styled cells.
#[derive(Clone, Debug)]
pub struct TermBuf {
    /// Buffer size in cells.
    size: Expanse,
    /// Backing cell storage.
    cells: Vec<Cell>,
}

impl TermBuf {
    /// Construct a buffer filled with the given character and style.
    pub fn new(size: impl Into<Expanse>, ch: char, style: Style) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::new(ch, style); size.area() as usize],
        }
    }

    /// Create an empty TermBuf filled with NULL characters.
    pub fn empty(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::empty(Style::default()); size.area() as usize],
        }
    }

    /// Convert a point into a cell index.
    fn idx(&self, p: Point) -> Option<usize> {
        if self.size.rect().contains_point(p) {
            Some(p.y as usize * self.size.w as usize + p.x as usize)
        } else {
            None
        }
    }

    /// The text of each row, with NULL cells shown as spaces.
    pub fn lines(&self) -> Vec<String> {
        (0..self.size.h)
            .map(|y| {
                let mut line = String::new();
                for x in 0..self.size.w {
                    if let Some(cell) = self.cell(Point { x, y }) {
                        cell.push_text(&mut line);
                    }
                }
                line
            })
            .collect()
    }

    /// Render this buffer in full using the provided backend, batching runs
    /// of text with the same style.
    pub fn render<R: RenderBackend>(&self, backend: &mut R) -> Result<()> {
        let width = self.size.w as usize;
        for y in 0..self.size.h {
            let row = &self.cells[y as usize * width..(y as usize + 1) * width];
            let mut x = 0;
            while x < row.len() {
                let style = row[x].style;
                let start_x = x;
                let mut text = String::new();
                while x < row.len() && row[x].style == style {
                    row[x].push_text(&mut text);
                    x += 1;
                }
                backend.style(&style)?;
                backend.text(
                    Point {
                        x: start_x as u32,
                        y,
                    },
                    &text,
                )?;
            }
        }
        backend.flush()
    }
}

impl Canvas for TermBuf {
    fn size(&self) -> Expanse {
        self.size
    }

    fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    fn set_cell(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }
}
