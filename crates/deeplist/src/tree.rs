//! The item tree: entries, their sub-lists, and structural edits.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    list::{Action, DeepList},
    path::{self, IndexPath},
};

/// One selectable row definition.
#[derive(Clone, Default)]
pub struct Entry {
    /// Main text, highlighted when the entry is selected.
    pub main_text: String,
    /// Secondary text, shown underneath the main text when enabled.
    pub secondary_text: String,
    /// Key that selects and activates the entry directly.
    pub shortcut: Option<char>,
    /// Called when the entry is activated.
    pub action: Option<Action>,
    /// Nested entries.
    pub sub_list: Option<SubList>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("main_text", &self.main_text)
            .field("secondary_text", &self.secondary_text)
            .field("shortcut", &self.shortcut)
            .field("action", &self.action.is_some())
            .field("sub_list", &self.sub_list)
            .finish()
    }
}

impl Entry {
    /// Construct an entry with main and secondary text.
    pub fn new(main_text: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            main_text: main_text.into(),
            secondary_text: secondary_text.into(),
            ..Self::default()
        }
    }

    /// Set the shortcut key.
    pub fn with_shortcut(mut self, shortcut: char) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Set the activation callback. The callback receives the list that owns
    /// the entry and may edit it freely.
    pub fn on_select(mut self, f: impl FnMut(&mut DeepList) + 'static) -> Self {
        self.action = Some(Rc::new(RefCell::new(f)));
        self
    }

    /// Does this entry own a non-empty sub-list?
    pub fn has_children(&self) -> bool {
        self.sub_list.as_ref().is_some_and(|s| !s.items.is_empty())
    }

    /// Does this entry own a non-empty sub-list that is currently displayed?
    pub fn shows_children(&self) -> bool {
        self.sub_list
            .as_ref()
            .is_some_and(|s| s.display && !s.items.is_empty())
    }

    /// The entry's children, empty if it has no sub-list.
    pub fn children(&self) -> &[Self] {
        self.sub_list.as_ref().map_or(&[], |s| &s.items)
    }
}

/// An entry's owned, independently expandable list of children.
#[derive(Clone, Debug, Default)]
pub struct SubList {
    /// Whether the children are shown.
    pub display: bool,
    /// The children, in order.
    pub items: Vec<Entry>,
}

/// Map a possibly negative insertion index into `[0, len]`. -1 appends.
fn insertion_index(index: isize, len: usize) -> usize {
    let index = if index < 0 {
        len as isize + index + 1
    } else {
        index
    };
    index.clamp(0, len as isize) as usize
}

/// The ordered sequence of top-level entries. Owns every entry transitively.
#[derive(Clone, Debug, Default)]
pub struct ItemTree {
    /// Top-level entries.
    items: Vec<Entry>,
}

impl ItemTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the tree empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The top-level entries.
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// Mutable access to the top-level entries, for path resolution.
    pub(crate) fn items_mut(&mut self) -> &mut [Entry] {
        &mut self.items
    }

    /// The top-level entry at an index.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.items.get(index)
    }

    /// Insert an entry among the top-level items and return the index it
    /// landed at. Negative indices count from the end (-1 appends), and
    /// out-of-range indices clamp to the ends.
    pub fn insert(&mut self, index: isize, entry: Entry) -> usize {
        let at = insertion_index(index, self.items.len());
        self.items.insert(at, entry);
        at
    }

    /// Remove the entry a raw path addresses. The path is normalized first,
    /// so unless the tree is empty something is always removed. Returns the
    /// normalized path of the removed entry along with the entry.
    pub fn remove_at(&mut self, raw: &[isize]) -> Option<(IndexPath, Entry)> {
        if self.items.is_empty() {
            return None;
        }
        let path = path::normalize(raw, &self.items);
        let (&last, parents) = path.as_slice().split_last()?;
        let mut items = &mut self.items;
        for &i in parents {
            items = &mut items.get_mut(i)?.sub_list.as_mut()?.items;
        }
        if last >= items.len() {
            return None;
        }
        let removed = items.remove(last);
        tracing::debug!("removed {:?} at {}", removed.main_text, path);
        Some((path, removed))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Flip the display flag of a top-level entry's sub-list. Returns the new
    /// flag, or `None` if the index is out of range or there is no sub-list.
    pub fn toggle_sub_list_display(&mut self, index: usize) -> Option<bool> {
        let sub = self.items.get_mut(index)?.sub_list.as_mut()?;
        sub.display = !sub.display;
        Some(sub.display)
    }

    /// Append a child to the last top-level entry, creating its sub-list if
    /// needed. The display flag is overwritten on every call. Does nothing on
    /// an empty tree.
    pub fn append_sub_item(&mut self, entry: Entry, display: bool) -> bool {
        let Some(parent) = self.items.last_mut() else {
            return false;
        };
        let sub = parent.sub_list.get_or_insert_with(SubList::default);
        sub.display = display;
        sub.items.push(entry);
        true
    }

    /// The main and secondary text of a top-level entry.
    ///
    /// Panics if the index is out of range.
    pub fn item_text(&self, index: usize) -> (&str, &str) {
        let item = &self.items[index];
        (&item.main_text, &item.secondary_text)
    }

    /// Replace the main and secondary text of a top-level entry.
    ///
    /// Panics if the index is out of range.
    pub fn set_item_text(
        &mut self,
        index: usize,
        main: impl Into<String>,
        secondary: impl Into<String>,
    ) {
        let item = &mut self.items[index];
        item.main_text = main.into();
        item.secondary_text = secondary.into();
    }

    /// Search the top-level entries and return matching indices in ascending
    /// order. Sub-items are never searched.
    ///
    /// An empty search string is ignored. If `must_contain_both` is set, the
    /// main search must be found in the main text and the secondary search in
    /// the secondary text; otherwise one match suffices. Empty item texts
    /// never match a non-empty search.
    pub fn find_all(
        &self,
        main_search: &str,
        secondary_search: &str,
        must_contain_both: bool,
        ignore_case: bool,
    ) -> Vec<usize> {
        if main_search.is_empty() && secondary_search.is_empty() {
            return Vec::new();
        }
        let fold = |s: &str| {
            if ignore_case {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };
        let main_search = fold(main_search);
        let secondary_search = fold(secondary_search);

        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                let main_text = fold(&item.main_text);
                let secondary_text = fold(&item.secondary_text);
                let main_hit = !main_text.is_empty() && main_text.contains(&main_search);
                let secondary_hit =
                    !secondary_text.is_empty() && secondary_text.contains(&secondary_search);
                if must_contain_both {
                    (main_search.is_empty() || main_hit)
                        && (secondary_search.is_empty() || secondary_hit)
                } else {
                    (!main_search.is_empty() && main_hit)
                        || (!secondary_search.is_empty() && secondary_hit)
                }
            })
            .map(|(i, _)| i)
            .collect()
    }
}
