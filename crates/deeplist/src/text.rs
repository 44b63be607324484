//! Column measurement over grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The part of a string that fits a column window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first visible grapheme.
    pub start: usize,
    /// Byte offset just past the last visible grapheme. Anything from here on
    /// was clipped by the right edge.
    pub end: usize,
    /// Display width of the visible part in cells.
    pub width: usize,
}

impl Span {
    /// Did text continue past the right edge of the window?
    pub fn clipped(&self, s: &str) -> bool {
        self.end < s.len()
    }
}

/// Locate the graphemes of `s` that are visible after skipping `skip` columns
/// and keeping at most `max` columns. A wide grapheme straddling the skip
/// boundary is dropped entirely.
pub fn column_span(s: &str, skip: usize, max: usize) -> Span {
    let mut col = 0usize;
    let mut width = 0usize;
    let mut start = None;

    for (idx, grapheme) in s.grapheme_indices(true) {
        let g_width = grapheme_width(grapheme);
        if start.is_none() {
            if col < skip {
                col += g_width;
                continue;
            }
            start = Some(idx);
        }
        if width + g_width > max {
            return Span {
                start: start.unwrap_or(idx),
                end: idx,
                width,
            };
        }
        width += g_width;
    }

    Span {
        start: start.unwrap_or(s.len()),
        end: s.len(),
        width,
    }
}

/// Return the display width of a grapheme cluster, clamped to terminal cell widths.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    UnicodeWidthStr::width(grapheme).clamp(1, 2)
}

/// Return the display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice_by_columns(s: &str, skip: usize, max: usize) -> (&str, usize) {
        let span = column_span(s, skip, max);
        (&s[span.start..span.end], span.width)
    }

    #[test]
    fn slice_by_columns_handles_wide_chars() {
        let s = "a界b";
        let (out, width) = slice_by_columns(s, 0, 3);
        assert_eq!(out, "a界");
        assert_eq!(width, display_width(out));

        let (out, width) = slice_by_columns(s, 1, 2);
        assert_eq!(out, "界");
        assert_eq!(width, 2);

        let (out, width) = slice_by_columns(s, 2, 2);
        assert_eq!(out, "b");
        assert_eq!(width, 1);
    }

    #[test]
    fn slice_by_columns_handles_zwj_sequences() {
        let s = "A👩‍💻B";
        let (out, width) = slice_by_columns(s, 0, 3);
        assert_eq!(out, "A👩‍💻");
        assert_eq!(width, 3);

        let (out, width) = slice_by_columns(s, 1, 2);
        assert_eq!(out, "👩‍💻");
        assert_eq!(width, 2);
    }

    #[test]
    fn span_reports_clipping() {
        let s = "abcdef";
        let span = column_span(s, 0, 4);
        assert_eq!(span.width, 4);
        assert!(span.clipped(s));

        let span = column_span(s, 2, 10);
        assert_eq!((span.start, span.end, span.width), (2, 6, 4));
        assert!(!span.clipped(s));

        let span = column_span(s, 9, 4);
        assert_eq!((span.start, span.end, span.width), (6, 6, 0));
        assert!(!span.clipped(s));

        let span = column_span(s, 0, 0);
        assert_eq!(span.width, 0);
        assert!(span.clipped(s));
    }
}
