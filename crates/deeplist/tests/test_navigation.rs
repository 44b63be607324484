//! Integration tests for selection movement.

#[cfg(test)]
mod tests {
    use deeplist::{
        DeepList, Entry, IndexPath, ListConfig, TermBuf,
        event::key::KeyCode,
        geom::{Expanse, Rect},
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn flat(n: usize, config: ListConfig) -> DeepList {
        let mut l = DeepList::new().with_config(config);
        for i in 0..n {
            l.add_item(Entry::new(format!("item {i}"), format!("about {i}")));
        }
        l
    }

    fn p(v: &[usize]) -> IndexPath {
        IndexPath::from(v.to_vec())
    }

    /// A, B with three displayed sub-items, C.
    fn abc() -> DeepList {
        let mut l = DeepList::new();
        l.add_item(Entry::new("A", ""));
        l.add_item(Entry::new("B", ""));
        l.add_sub_item(Entry::new("B0", ""), true);
        l.add_sub_item(Entry::new("B1", ""), true);
        l.add_sub_item(Entry::new("B2", ""), true);
        l.add_item(Entry::new("C", ""));
        l
    }

    #[test]
    fn descend_then_clamp_in_sublist() {
        let mut l = abc();
        l.handle_key(KeyCode::Down.into());
        assert_eq!(l.current_item(), &p(&[1]));
        l.handle_key(KeyCode::Down.into());
        assert_eq!(l.current_item(), &p(&[1, 0]));
        for _ in 0..5 {
            l.handle_key(KeyCode::Down.into());
        }
        assert_eq!(l.current_item(), &p(&[1, 2]));

        for _ in 0..5 {
            l.handle_key(KeyCode::Up.into());
        }
        assert_eq!(l.current_item(), &p(&[1, 0]));
    }

    #[test]
    fn home_and_end_leave_sublists() {
        let mut l = abc();
        l.set_current_item(&[1, 1]);
        l.handle_key(KeyCode::End.into());
        assert_eq!(l.current_item(), &p(&[2]));
        l.set_current_item(&[1, 1]);
        l.handle_key(KeyCode::Home.into());
        assert_eq!(l.current_item(), &p(&[0]));
    }

    #[test]
    fn wraparound_on_and_off() {
        let mut l = flat(3, ListConfig::default());
        l.handle_key(KeyCode::Up.into());
        assert_eq!(l.current_item(), &p(&[2]));
        l.handle_key(KeyCode::Down.into());
        assert_eq!(l.current_item(), &p(&[0]));

        let mut l = flat(3, ListConfig::default().with_wrap_around(false));
        l.handle_key(KeyCode::Up.into());
        assert_eq!(l.current_item(), &p(&[0]));
        l.handle_key(KeyCode::End.into());
        l.handle_key(KeyCode::Down.into());
        assert_eq!(l.current_item(), &p(&[2]));
    }

    #[test]
    fn tab_and_backtab() {
        let mut l = flat(3, ListConfig::default());
        l.handle_key(KeyCode::Tab.into());
        assert_eq!(l.current_item(), &p(&[1]));
        l.handle_key(KeyCode::BackTab.into());
        assert_eq!(l.current_item(), &p(&[0]));
        l.handle_key(deeplist::event::key::Shift + KeyCode::Tab);
        assert_eq!(l.current_item(), &p(&[2]));
    }

    #[test]
    fn page_down_moves_by_height() {
        let mut l = flat(10, ListConfig::default().with_wrap_around(false));
        l.set_size(Expanse::new(20, 4));
        l.handle_key(KeyCode::PageDown.into());
        assert_eq!(l.current_item(), &p(&[4]));
        l.handle_key(KeyCode::PageDown.into());
        l.handle_key(KeyCode::PageDown.into());
        assert_eq!(l.current_item(), &p(&[9]));
    }

    #[test]
    fn page_down_past_the_end_wraps_to_first() {
        let mut l = flat(4, ListConfig::default());
        l.set_size(Expanse::new(20, 10));
        l.set_current_item(&[1]);
        l.handle_key(KeyCode::PageDown.into());
        assert_eq!(l.current_item(), &p(&[0]));

        l.set_current_item(&[3]);
        l.handle_key(KeyCode::PageDown.into());
        assert_eq!(l.current_item(), &p(&[0]));
    }

    #[test]
    fn shortcut_selects_top_level_only() {
        let mut l = DeepList::new();
        l.add_item(Entry::new("A", "").with_shortcut('a'));
        l.add_sub_item(Entry::new("A0", "").with_shortcut('s'), true);
        l.add_item(Entry::new("B", "").with_shortcut('b'));

        assert!(l.handle_key('b'.into()));
        assert_eq!(l.current_item(), &p(&[1]));
        assert!(!l.handle_key('s'.into()));
        assert_eq!(l.current_item(), &p(&[1]));
    }

    #[test]
    fn keep_visible_with_secondary_text() {
        let mut l = flat(10, ListConfig::default());
        let mut tb = TermBuf::empty(Expanse::new(12, 5));
        let area = Rect::new(0, 0, 12, 5);
        l.draw(&mut tb, area, true).unwrap();

        l.set_current_item(&[9]);
        assert_eq!(l.offset(), (8, 0));
        l.draw(&mut tb, area, true).unwrap();
        let lines = tb.lines();
        assert!(lines.iter().any(|s| s.trim_end() == "item 9"));
        assert!(lines.iter().any(|s| s.trim_end() == "about 9"));
    }

    #[test]
    fn keep_visible_walking_down() {
        let mut l = flat(10, ListConfig::default().with_secondary_text(false));
        l.set_size(Expanse::new(12, 3));
        for i in 1..10 {
            l.handle_key(KeyCode::Down.into());
            let (offset, _) = l.offset();
            assert!(offset <= i && i < offset + 3, "item {i} at offset {offset}");
        }
        l.handle_key(KeyCode::Down.into());
        assert_eq!(l.offset(), (0, 0));
    }

    #[test]
    fn resize_reapplies_keep_visible() {
        let mut l = flat(10, ListConfig::default().with_secondary_text(false));
        l.set_size(Expanse::new(12, 10));
        l.set_current_item(&[9]);
        assert_eq!(l.offset(), (0, 0));
        l.set_size(Expanse::new(12, 4));
        assert_eq!(l.offset(), (6, 0));
    }

    #[test]
    fn removal_on_singleton_tree() {
        let mut l = flat(1, ListConfig::default());
        l.remove_item(&[0]);
        assert_eq!(l.item_count(), 0);
        assert_eq!(l.current_item(), &p(&[0]));
        assert!(l.current_entry().is_none());
        l.remove_item(&[0]);
        assert_eq!(l.item_count(), 0);
        assert!(!l.handle_key(KeyCode::Down.into()));
    }

    #[test]
    fn clear_resets() {
        let mut l = flat(5, ListConfig::default());
        l.set_current_item(&[3]).set_offset(2, 4);
        l.clear();
        assert_eq!(l.item_count(), 0);
        assert_eq!(l.current_item(), &p(&[0]));
        assert_eq!(l.offset(), (0, 0));
    }

    proptest! {
        #[test]
        fn advance_retreat_inverse(n in 1usize..12, start in 0usize..12, wrap: bool) {
            let start = start % n;
            let mut l = flat(n, ListConfig::default().with_wrap_around(wrap));
            l.set_current_item(&[start as isize]);
            l.handle_key(KeyCode::Down.into());
            l.handle_key(KeyCode::Up.into());
            if wrap || start + 1 < n {
                prop_assert_eq!(l.current_item(), &p(&[start]));
            }
        }

        #[test]
        fn selection_always_resolves(keys in prop::collection::vec(0u8..6, 0..40)) {
            let mut l = abc();
            l.set_size(Expanse::new(10, 4));
            for k in keys {
                let code = match k {
                    0 => KeyCode::Down,
                    1 => KeyCode::Up,
                    2 => KeyCode::Home,
                    3 => KeyCode::End,
                    4 => KeyCode::PageDown,
                    _ => KeyCode::Tab,
                };
                l.handle_key(code.into());
                prop_assert!(l.current_entry().is_some());
            }
        }
    }
}
