//! Selection movement through the item tree.

use crate::{
    path::{self, IndexPath},
    tree::Entry,
};

/// Computes new selections from the current one. Moves never modify the tree
/// except to reveal the sub-lists along the path being moved through.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    /// Whether moving past either end of the top level wraps around.
    wrap_around: bool,
}

impl Navigator {
    /// Construct a navigator.
    pub fn new(wrap_around: bool) -> Self {
        Self { wrap_around }
    }

    /// Move forward by `delta` steps. If the current entry shows its
    /// children, the move descends into the first child instead.
    pub fn advance(&self, items: &mut [Entry], current: &IndexPath, delta: usize) -> IndexPath {
        let mut raw = current.to_raw();
        let descend = path::resolve(current.as_slice(), items)
            .is_some_and(|r| r.entry.shows_children());
        if descend {
            tracing::debug!("descending from {}", current);
            raw.push(0);
        } else if let Some(last) = raw.last_mut() {
            tracing::debug!("advancing {} by {}", current, delta);
            *last += delta as isize;
        }
        self.settle(items, raw)
    }

    /// Move backward by `delta` steps within the current level. Never ascends
    /// out of a sub-list.
    pub fn retreat(&self, items: &mut [Entry], current: &IndexPath, delta: usize) -> IndexPath {
        let mut raw = current.to_raw();
        // Reveal the path we are moving within.
        path::resolve(current.as_slice(), items);
        if let Some(last) = raw.last_mut() {
            tracing::debug!("retreating {} by {}", current, delta);
            *last -= delta as isize;
        }
        self.settle(items, raw)
    }

    /// The first top-level entry.
    pub fn first(&self) -> IndexPath {
        IndexPath::root()
    }

    /// The last top-level entry.
    pub fn last(&self, items: &[Entry]) -> IndexPath {
        IndexPath::top_level(items.len().saturating_sub(1))
    }

    /// Wrap or clamp the moved path, then normalize it. Only the top-level
    /// component wraps. Nested components are clamped into their level.
    fn settle(&self, items: &[Entry], mut raw: Vec<isize>) -> IndexPath {
        if items.is_empty() {
            return IndexPath::root();
        }
        let len = items.len() as isize;
        if let Some(top) = raw.first_mut() {
            *top = if self.wrap_around {
                if *top < 0 {
                    len - 1
                } else if *top >= len {
                    0
                } else {
                    *top
                }
            } else {
                (*top).clamp(0, len - 1)
            };
        }
        for component in raw.iter_mut().skip(1) {
            *component = (*component).max(0);
        }
        path::normalize(&raw, items)
    }
}

/// The index of the first top-level entry with the given shortcut. Sub-items'
/// shortcuts are never consulted.
pub fn find_shortcut(items: &[Entry], c: char) -> Option<usize> {
    items.iter().position(|e| e.shortcut == Some(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ItemTree;

    fn flat(n: usize) -> ItemTree {
        let mut t = ItemTree::new();
        for i in 0..n {
            t.insert(-1, Entry::new(format!("item {i}"), ""));
        }
        t
    }

    fn p(v: &[usize]) -> IndexPath {
        IndexPath::from(v.to_vec())
    }

    #[test]
    fn wraparound() {
        let mut t = flat(3);
        let nav = Navigator::new(true);
        assert_eq!(nav.advance(t.items_mut(), &p(&[2]), 1), p(&[0]));
        assert_eq!(nav.retreat(t.items_mut(), &p(&[0]), 1), p(&[2]));

        let nav = Navigator::new(false);
        assert_eq!(nav.advance(t.items_mut(), &p(&[2]), 1), p(&[2]));
        assert_eq!(nav.retreat(t.items_mut(), &p(&[0]), 1), p(&[0]));
    }

    #[test]
    fn page_moves_wrap_to_opposite_end() {
        let mut t = flat(4);
        let nav = Navigator::new(true);
        assert_eq!(nav.advance(t.items_mut(), &p(&[1]), 10), p(&[0]));
        assert_eq!(nav.retreat(t.items_mut(), &p(&[2]), 10), p(&[3]));
        let nav = Navigator::new(false);
        assert_eq!(nav.advance(t.items_mut(), &p(&[1]), 10), p(&[3]));
    }

    #[test]
    fn descend_and_stay_in_sublist() {
        let mut t = ItemTree::new();
        t.insert(-1, Entry::new("A", ""));
        t.append_sub_item(Entry::new("A0", ""), true);
        t.append_sub_item(Entry::new("A1", ""), true);
        t.insert(-1, Entry::new("B", ""));
        t.insert(-1, Entry::new("C", ""));
        let nav = Navigator::new(true);

        let mut cur = p(&[0]);
        cur = nav.advance(t.items_mut(), &cur, 1);
        assert_eq!(cur, p(&[0, 0]));
        cur = nav.advance(t.items_mut(), &cur, 1);
        assert_eq!(cur, p(&[0, 1]));
        // Past the end of the sub-list: clamped, no ascent.
        cur = nav.advance(t.items_mut(), &cur, 1);
        assert_eq!(cur, p(&[0, 1]));
        cur = nav.retreat(t.items_mut(), &cur, 1);
        assert_eq!(cur, p(&[0, 0]));
        cur = nav.retreat(t.items_mut(), &cur, 1);
        assert_eq!(cur, p(&[0, 0]));
    }

    #[test]
    fn collapsed_sublist_is_skipped() {
        let mut t = ItemTree::new();
        t.insert(-1, Entry::new("A", ""));
        t.append_sub_item(Entry::new("A0", ""), false);
        t.insert(-1, Entry::new("B", ""));
        let nav = Navigator::new(true);
        assert_eq!(nav.advance(t.items_mut(), &p(&[0]), 1), p(&[1]));
    }

    #[test]
    fn moving_reveals_path() {
        let mut t = ItemTree::new();
        t.insert(-1, Entry::new("A", ""));
        t.append_sub_item(Entry::new("A0", ""), false);
        t.append_sub_item(Entry::new("A1", ""), false);
        let nav = Navigator::new(true);
        assert_eq!(nav.advance(t.items_mut(), &p(&[0, 0]), 1), p(&[0, 1]));
        assert!(t.get(0).unwrap().shows_children());
    }

    #[test]
    fn first_last() {
        let t = flat(5);
        let nav = Navigator::new(true);
        assert_eq!(nav.first(), p(&[0]));
        assert_eq!(nav.last(t.items()), p(&[4]));
    }

    #[test]
    fn shortcut_scope() {
        let mut t = ItemTree::new();
        t.insert(-1, Entry::new("A", "").with_shortcut('a'));
        t.append_sub_item(Entry::new("A0", "").with_shortcut('z'), true);
        t.insert(-1, Entry::new("B", "").with_shortcut('b'));
        t.insert(-1, Entry::new("B'", "").with_shortcut('b'));
        assert_eq!(find_shortcut(t.items(), 'b'), Some(1));
        assert_eq!(find_shortcut(t.items(), 'z'), None);
        assert_eq!(find_shortcut(t.items(), 'q'), None);
    }

    #[test]
    fn empty_tree() {
        let mut t = ItemTree::new();
        let nav = Navigator::new(true);
        assert_eq!(nav.advance(t.items_mut(), &p(&[0]), 1), p(&[0]));
        assert_eq!(nav.retreat(t.items_mut(), &p(&[0]), 1), p(&[0]));
    }
}
