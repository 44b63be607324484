//! Scroll state, and the flattened ordering it is measured in.
//!
//! The vertical offset counts *units* of a flattened stream: every top-level
//! entry is one unit, followed by one unit per child of a displayed sub-list.
//! Secondary text does not add units; it is accounted for when the offset is
//! adjusted against the viewport height.

use std::iter;

use crate::{geom::Expanse, tree::Entry};

/// One unit of the flattened stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRow {
    /// Index of the top-level entry.
    pub top: usize,
    /// Index of the child within the top-level entry's sub-list, if this unit
    /// is a child.
    pub sub: Option<usize>,
}

/// Iterate over the flattened stream of top-level entries and the children of
/// displayed sub-lists. Only one level of nesting is flattened.
pub fn flat_rows(items: &[Entry]) -> impl Iterator<Item = FlatRow> + '_ {
    items.iter().enumerate().flat_map(|(top, entry)| {
        let children = if entry.shows_children() {
            entry.children().len()
        } else {
            0
        };
        iter::once(FlatRow { top, sub: None })
            .chain((0..children).map(move |j| FlatRow { top, sub: Some(j) }))
    })
}

/// The position of a path in the flattened stream. Paths deeper than two
/// components count at their second component. If the second component is
/// not visible, the top-level entry's position is used.
pub fn flattened_offset(path: &[usize], items: &[Entry]) -> usize {
    let top = path.first().copied().unwrap_or(0);
    let sub = path.get(1).copied();
    let mut fallback = 0;
    for (i, row) in flat_rows(items).enumerate() {
        if row.top == top {
            if row.sub == sub {
                return i;
            }
            if row.sub.is_none() {
                fallback = i;
            }
        }
    }
    fallback
}

/// The visible window over the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Number of flattened units scrolled past at the top.
    pub item_offset: usize,
    /// Number of columns scrolled past at the left.
    pub horizontal_offset: usize,
    /// Size of the window.
    pub size: Expanse,
}

impl Viewport {
    /// Scroll vertically so that the unit at `offset` is fully visible.
    ///
    /// With secondary text every top-level entry takes two rows, so the
    /// check counts double. The offset never scrolls past the target unit. A
    /// zero height does nothing.
    pub fn adjust(&mut self, offset: usize, show_secondary: bool) {
        let height = self.size.h as isize;
        if height == 0 {
            return;
        }
        let offset = offset as isize;
        if offset < self.item_offset as isize {
            self.item_offset = offset as usize;
            return;
        }
        let above = offset - self.item_offset as isize;
        if show_secondary {
            if 2 * above >= height - 1 {
                self.item_offset = ((2 * offset + 3 - height) / 2).clamp(0, offset) as usize;
            }
        } else if above >= height {
            self.item_offset = (offset + 1 - height).max(0) as usize;
        }
    }

    /// Number of screen rows the stream occupies from the current offset
    /// onward.
    pub fn rows_below(&self, items: &[Entry], show_secondary: bool) -> usize {
        flat_rows(items)
            .skip(self.item_offset)
            .map(|r| if r.sub.is_none() && show_secondary { 2 } else { 1 })
            .sum()
    }
}
