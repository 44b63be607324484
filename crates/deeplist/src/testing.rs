//! Utilities for asserting on rendered buffers in tests.
use crate::{
    canvas::{Canvas, TermBuf},
    geom::Point,
    style::PartialStyle,
};

/// A helper macro to create buffers for the termbuf match assertions.
#[macro_export]
macro_rules! buf {
    ($($line:literal)*) => {
        &[$($line),*]
    };
}

/// Character used to represent NULL cells, so partial renders can be matched.
const NULL_CHAR: char = 'X';

/// Assertions over the contents of a buffer.
#[derive(Debug)]
pub struct BufTest<'a> {
    /// Reference to the buffer under test.
    buf: &'a TermBuf,
}

impl<'a> BufTest<'a> {
    /// Create a new BufTest with a reference to a TermBuf.
    pub fn new(buf: &'a TermBuf) -> Self {
        Self { buf }
    }

    /// The buffer rows, one char per cell, NULL cells shown as the null char.
    pub fn lines(&self) -> Vec<String> {
        let size = self.buf.size();
        (0..size.h)
            .map(|y| {
                (0..size.w)
                    .filter_map(|x| self.buf.cell(Point { x, y }))
                    .map(|cell| {
                        if cell.is_empty() || cell.continuation {
                            NULL_CHAR
                        } else {
                            cell.ch
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns true if the buffer content matches the expected lines.
    /// Trailing whitespace is ignored on both sides.
    pub fn matches(&self, expected: &[&str]) -> bool {
        let actual = self.lines();
        actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .all(|(a, e)| a.trim_end() == e.trim_end())
    }

    /// Assert that the buffer matches the expected lines with pretty printed output on failure.
    pub fn assert_matches(&self, expected: &[&str]) {
        if self.matches(expected) {
            return;
        }
        let actual = self.lines();
        let width = self.buf.size().w as usize;
        println!("\nExpected:");
        println!("┌{}┐", "─".repeat(width));
        for line in expected {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));
        println!("\nActual:");
        println!("┌{}┐", "─".repeat(width));
        for line in &actual {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));
        panic!("Buffer contents did not match expected pattern");
    }

    /// Does the buffer contain the supplied substring with every cell in the given style?
    pub fn contains_text_style(&self, txt: &str, style: &PartialStyle) -> bool {
        let size = self.buf.size();
        let tl = txt.chars().count() as u32;
        if tl == 0 || tl > size.w {
            return false;
        }
        (0..size.h).any(|y| {
            (0..=size.w - tl).any(|x| {
                txt.chars().enumerate().all(|(i, ch)| {
                    self.buf
                        .cell(Point { x: x + i as u32, y })
                        .is_some_and(|cell| cell.ch == ch && style.matches(&cell.style))
                })
            })
        })
    }
}
