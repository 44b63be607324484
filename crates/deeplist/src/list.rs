//! The list control: owns the tree, the selection, the viewport and the
//! event hooks, and turns input into navigation.

use std::{cell::RefCell, collections::VecDeque, fmt, rc::Rc};

use crate::{
    canvas::Canvas,
    config::ListConfig,
    error::{Error, Result},
    event::{
        Event,
        key::{Key, KeyCode, Mods},
        mouse::{self, MouseEvent},
    },
    geom::{Expanse, Rect},
    navigator::{self, Navigator},
    path::{self, IndexPath},
    render,
    tree::{Entry, ItemTree},
    viewport::{self, Viewport},
};

/// Callback run when an entry is activated.
pub type Action = Rc<RefCell<dyn FnMut(&mut DeepList)>>;

/// Handler for changed and selected events.
type SelectionHandler = Rc<RefCell<dyn FnMut(&mut DeepList, &Selection)>>;

/// Handler for the done event.
type DoneHandler = Rc<RefCell<dyn FnMut(&mut DeepList)>>;

/// Columns scrolled per horizontal scroll step.
const HORIZONTAL_STEP: usize = 2;

/// A snapshot of a selected entry, handed to event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Normalized path of the entry.
    pub path: IndexPath,
    /// Main text at the time of the event.
    pub main_text: String,
    /// Secondary text at the time of the event.
    pub secondary_text: String,
    /// Shortcut key, if any.
    pub shortcut: Option<char>,
}

impl Selection {
    /// Snapshot an entry at a path.
    fn new(path: IndexPath, entry: &Entry) -> Self {
        Self {
            path,
            main_text: entry.main_text.clone(),
            secondary_text: entry.secondary_text.clone(),
            shortcut: entry.shortcut,
        }
    }
}

/// Events the list reports to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// The selection moved to a different entry.
    Changed(Selection),
    /// An entry was activated.
    Selected(Selection),
    /// The user asked to leave the list.
    Done,
}

/// Registered event handlers.
#[derive(Default)]
struct Handlers {
    /// Receives [`ListEvent::Changed`].
    changed: Option<SelectionHandler>,
    /// Receives [`ListEvent::Selected`].
    selected: Option<SelectionHandler>,
    /// Receives [`ListEvent::Done`].
    done: Option<DoneHandler>,
}

/// A hierarchical list of selectable entries.
///
/// Entries may own sub-lists that expand and collapse. The selection is an
/// [`IndexPath`], normalized after every edit, so removing or inserting
/// entries never leaves it dangling. Callbacks receive the list itself and
/// may edit it.
#[derive(Default)]
pub struct DeepList {
    /// The entries.
    tree: ItemTree,
    /// The current selection.
    current: IndexPath,
    /// Behaviour and styles.
    config: ListConfig,
    /// Scroll state.
    viewport: Viewport,
    /// Did the last draw clip any text on the right?
    overflowing: bool,
    /// Event hooks.
    handlers: Handlers,
    /// Events waiting for the running handler to return.
    pending: VecDeque<ListEvent>,
    /// Is a handler running?
    dispatching: bool,
}

impl fmt::Debug for DeepList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepList")
            .field("tree", &self.tree)
            .field("current", &self.current)
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl DeepList {
    /// An empty list with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Replace the configuration of a live list.
    pub fn set_config(&mut self, config: ListConfig) -> &mut Self {
        self.config = config;
        self.adjust_offset();
        self
    }

    /// The item tree.
    pub fn tree(&self) -> &ItemTree {
        &self.tree
    }

    /// Append a top-level entry.
    pub fn add_item(&mut self, entry: Entry) -> &mut Self {
        self.insert_item(-1, entry)
    }

    /// Insert a top-level entry. Negative indices count from the end, -1
    /// appending. The selection keeps pointing at the same entry.
    pub fn insert_item(&mut self, index: isize, entry: Entry) -> &mut Self {
        let len = self.tree.len();
        let at = self.tree.insert(index, entry);
        if len == 0 {
            self.current = IndexPath::root();
            self.emit_changed();
        } else if at <= self.current.top() && self.current.top() < len {
            let mut shifted = self.current.as_slice().to_vec();
            shifted[0] += 1;
            self.current = IndexPath::from(shifted);
        }
        self
    }

    /// Append a child to the last top-level entry, and set whether that
    /// entry's sub-list is displayed.
    pub fn add_sub_item(&mut self, entry: Entry, display: bool) -> &mut Self {
        self.tree.append_sub_item(entry, display);
        self.leave_hidden();
        self
    }

    /// Remove the entry a path addresses. Negative components count from
    /// the end of their level.
    pub fn remove_item(&mut self, path: &[isize]) -> &mut Self {
        let Some((removed, _)) = self.tree.remove_at(path) else {
            return self;
        };
        if self.tree.is_empty() {
            self.current = IndexPath::root();
            self.viewport.item_offset = 0;
            return self;
        }

        let hit = removed.is_prefix_of(&self.current);
        let depth = removed.depth() - 1;
        let mut raw = self.current.to_raw();
        if self.current.depth() > depth
            && self.current.as_slice()[..depth] == removed.as_slice()[..depth]
            && removed.as_slice()[depth] < self.current.as_slice()[depth]
        {
            raw[depth] -= 1;
        }
        self.current = path::normalize(&raw, self.tree.items());
        if hit {
            self.emit_changed();
        }
        self.clamp_item_offset();
        self.adjust_offset();
        self
    }

    /// Flip whether a top-level entry's sub-list is displayed. Does nothing
    /// if the entry has no sub-list. Collapsing the sub-list the selection is
    /// in moves the selection up to the entry.
    pub fn toggle_sub_list_display(&mut self, index: usize) -> &mut Self {
        if let Some(shown) = self.tree.toggle_sub_list_display(index) {
            tracing::debug!("sub-list {} display {}", index, shown);
            self.leave_hidden();
            self.clamp_item_offset();
        }
        self
    }

    /// Replace the text of a top-level entry.
    ///
    /// Panics if the index is out of range.
    pub fn set_item_text(
        &mut self,
        index: usize,
        main: impl Into<String>,
        secondary: impl Into<String>,
    ) -> &mut Self {
        self.tree.set_item_text(index, main, secondary);
        self
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> &mut Self {
        self.tree.clear();
        self.current = IndexPath::root();
        self.viewport.item_offset = 0;
        self.viewport.horizontal_offset = 0;
        self
    }

    /// Number of top-level entries.
    pub fn item_count(&self) -> usize {
        self.tree.len()
    }

    /// The main and secondary text of a top-level entry.
    ///
    /// Panics if the index is out of range.
    pub fn item_text(&self, index: usize) -> (&str, &str) {
        self.tree.item_text(index)
    }

    /// The current selection.
    pub fn current_item(&self) -> &IndexPath {
        &self.current
    }

    /// The currently selected entry, if the list is not empty.
    pub fn current_entry(&self) -> Option<&Entry> {
        path::peek(self.current.as_slice(), self.tree.items())
    }

    /// Select the entry a path addresses, revealing it if it sits inside
    /// collapsed sub-lists. Negative components count from the end.
    pub fn set_current_item(&mut self, path: &[isize]) -> &mut Self {
        let next = path::normalize(path, self.tree.items());
        path::resolve(next.as_slice(), self.tree.items_mut());
        self.select(next);
        self.adjust_offset();
        self
    }

    /// Indices of top-level entries matching a search. See
    /// [`ItemTree::find_all`].
    pub fn find_items(
        &self,
        main_search: &str,
        secondary_search: &str,
        must_contain_both: bool,
        ignore_case: bool,
    ) -> Vec<usize> {
        self.tree
            .find_all(main_search, secondary_search, must_contain_both, ignore_case)
    }

    /// The vertical offset in flattened units and the horizontal offset in
    /// columns.
    pub fn offset(&self) -> (usize, usize) {
        (self.viewport.item_offset, self.viewport.horizontal_offset)
    }

    /// Set the scroll offsets.
    pub fn set_offset(&mut self, items: usize, columns: usize) -> &mut Self {
        self.viewport.item_offset = items;
        self.viewport.horizontal_offset = columns;
        self
    }

    /// Set the viewport size. A change re-applies the keep-visible policy.
    pub fn set_size(&mut self, size: Expanse) -> &mut Self {
        if self.viewport.size != size {
            self.viewport.size = size;
            self.adjust_offset();
        }
        self
    }

    /// Register the handler for selection changes.
    pub fn set_changed_func(
        &mut self,
        f: impl FnMut(&mut Self, &Selection) + 'static,
    ) -> &mut Self {
        self.handlers.changed = Some(Rc::new(RefCell::new(f)));
        self
    }

    /// Register the handler for activations.
    pub fn set_selected_func(
        &mut self,
        f: impl FnMut(&mut Self, &Selection) + 'static,
    ) -> &mut Self {
        self.handlers.selected = Some(Rc::new(RefCell::new(f)));
        self
    }

    /// Register the handler for the user leaving the list.
    pub fn set_done_func(&mut self, f: impl FnMut(&mut Self) + 'static) -> &mut Self {
        self.handlers.done = Some(Rc::new(RefCell::new(f)));
        self
    }

    /// Queue an event and, unless a handler is already running, deliver
    /// every queued event in order. Events raised by a handler are delivered
    /// after it returns.
    fn emit(&mut self, event: ListEvent) {
        tracing::trace!("emit {:?}", event);
        self.pending.push_back(event);
        if self.dispatching {
            return;
        }
        self.dispatching = true;
        while let Some(event) = self.pending.pop_front() {
            self.dispatch(event);
        }
        self.dispatching = false;
    }

    /// Run the handler for one event. Handlers are cloned out before they
    /// run, so they can edit the list.
    fn dispatch(&mut self, event: ListEvent) {
        match event {
            ListEvent::Changed(selection) => {
                if let Some(h) = self.handlers.changed.clone() {
                    match h.try_borrow_mut() {
                        Ok(mut f) => (*f)(self, &selection),
                        Err(_) => {
                            tracing::warn!("changed handler busy, dropped {}", selection.path)
                        }
                    }
                }
            }
            ListEvent::Selected(selection) => {
                if let Some(h) = self.handlers.selected.clone() {
                    match h.try_borrow_mut() {
                        Ok(mut f) => (*f)(self, &selection),
                        Err(_) => {
                            tracing::warn!("selected handler busy, dropped {}", selection.path)
                        }
                    }
                }
            }
            ListEvent::Done => {
                if let Some(h) = self.handlers.done.clone() {
                    match h.try_borrow_mut() {
                        Ok(mut f) => (*f)(self),
                        Err(_) => tracing::warn!("done handler busy, dropped"),
                    }
                }
            }
        }
    }

    /// Fire a changed event for the current selection.
    fn emit_changed(&mut self) {
        if let Some(entry) = path::peek(self.current.as_slice(), self.tree.items()) {
            let selection = Selection::new(self.current.clone(), entry);
            self.emit(ListEvent::Changed(selection));
        }
    }

    /// Move the selection, firing a changed event if it moved.
    fn select(&mut self, next: IndexPath) -> bool {
        if next == self.current {
            return false;
        }
        tracing::debug!("selection {} -> {}", self.current, next);
        self.current = next;
        self.emit_changed();
        true
    }

    /// Move the selection as a navigation step: fire changed and keep the
    /// new selection in view.
    fn navigate(&mut self, next: IndexPath) {
        if self.select(next) {
            self.adjust_offset();
        }
    }

    /// Run the selected entry's action, then the selected handler.
    fn activate(&mut self) {
        let path = self.current.clone();
        let Some(resolved) = path::resolve(path.as_slice(), self.tree.items_mut()) else {
            return;
        };
        let action = resolved.entry.action.clone();
        let selection = Selection::new(path, resolved.entry);
        if let Some(action) = action {
            match action.try_borrow_mut() {
                Ok(mut f) => (*f)(self),
                Err(_) => tracing::warn!("action for {} re-entered, skipped", selection.path),
            }
        }
        self.emit(ListEvent::Selected(selection));
    }

    /// If the selection sits inside a collapsed sub-list, move it to the
    /// nearest visible ancestor.
    fn leave_hidden(&mut self) {
        let mut visible = Vec::new();
        let mut level = self.tree.items();
        for &i in self.current.as_slice() {
            let Some(entry) = level.get(i) else {
                break;
            };
            visible.push(i);
            if !entry.shows_children() {
                break;
            }
            level = entry.children();
        }
        if visible.len() < self.current.depth() {
            self.navigate(IndexPath::from(visible));
        }
    }

    /// Keep the vertical offset inside the flattened stream.
    fn clamp_item_offset(&mut self) {
        let units = viewport::flat_rows(self.tree.items()).count();
        self.viewport.item_offset = self.viewport.item_offset.min(units.saturating_sub(1));
    }

    /// Scroll so the selection is visible.
    fn adjust_offset(&mut self) {
        let offset = viewport::flattened_offset(self.current.as_slice(), self.tree.items());
        self.viewport
            .adjust(offset, self.config.show_secondary_text);
    }

    /// Handle a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let key = key.normalize();
        if key == KeyCode::Esc {
            self.emit(ListEvent::Done);
            return true;
        }
        // Bindings are unmodified keys. Shift has already been folded in.
        if self.tree.is_empty() || key.mods != Mods::default() {
            return false;
        }

        let nav = Navigator::new(self.config.wrap_around);
        let items = self.tree.items_mut();
        let next = match key.key {
            KeyCode::Down | KeyCode::Tab => nav.advance(items, &self.current, 1),
            KeyCode::Up | KeyCode::BackTab => nav.retreat(items, &self.current, 1),
            KeyCode::Home => nav.first(),
            KeyCode::End => nav.last(items),
            KeyCode::PageDown => {
                let height = (self.viewport.size.h as usize).max(1);
                nav.advance(items, &self.current, height)
            }
            KeyCode::Right if self.overflowing => {
                self.viewport.horizontal_offset += HORIZONTAL_STEP;
                return true;
            }
            KeyCode::Right => nav.advance(items, &self.current, 1),
            KeyCode::Left if self.viewport.horizontal_offset > 0 => {
                self.viewport.horizontal_offset = self
                    .viewport
                    .horizontal_offset
                    .saturating_sub(HORIZONTAL_STEP);
                return true;
            }
            KeyCode::Left => nav.retreat(items, &self.current, 1),
            KeyCode::Enter => {
                self.activate();
                return true;
            }
            _ => match key.printable() {
                Some(' ') => {
                    self.activate();
                    return true;
                }
                Some(c) => {
                    let Some(i) = navigator::find_shortcut(items, c) else {
                        return false;
                    };
                    self.navigate(IndexPath::top_level(i));
                    self.activate();
                    return true;
                }
                None => return false,
            },
        };
        self.navigate(next);
        true
    }

    /// Handle a mouse event aimed at a list drawn in `area`. Returns true if
    /// the event was consumed.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) -> bool {
        if !area.contains_point(event.location) {
            return false;
        }
        if event.is_left_click() {
            let hit = render::plan(self.tree.items(), &self.config, &self.viewport, area)
                .path_at(event.location)
                .cloned();
            if let Some(path) = hit {
                self.navigate(path);
                self.activate();
            }
            return true;
        }
        match event.action {
            mouse::Action::ScrollUp => {
                self.viewport.item_offset = self.viewport.item_offset.saturating_sub(1);
                true
            }
            mouse::Action::ScrollDown => {
                let rows = self
                    .viewport
                    .rows_below(self.tree.items(), self.config.show_secondary_text);
                if rows > area.h as usize {
                    self.viewport.item_offset += 1;
                }
                true
            }
            _ => false,
        }
    }

    /// Handle an input event for a list drawn in `area`. Returns true if the
    /// event was consumed.
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        match event {
            Event::Key(k) => self.handle_key(*k),
            Event::Mouse(m) => self.handle_mouse(*m, area),
            Event::Resize(_) | Event::FocusGained | Event::FocusLost => false,
        }
    }

    /// Draw the list into an area of a canvas.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, area: Rect, focused: bool) -> Result<()> {
        let size = canvas.size();
        if !size.rect().contains_rect(&area) {
            return Err(Error::Render(format!(
                "list area {area:?} exceeds canvas {size:?}"
            )));
        }
        self.set_size(area.into());
        let plan = render::plan(self.tree.items(), &self.config, &self.viewport, area);
        plan.paint(canvas, &self.config, self.current.top(), focused);
        self.viewport.horizontal_offset = plan.horizontal_offset;
        self.overflowing = plan.overflowing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::key, geom::Point};

    fn list(names: &[&str]) -> DeepList {
        let mut l = DeepList::new();
        for n in names {
            l.add_item(Entry::new(*n, ""));
        }
        l
    }

    fn p(v: &[usize]) -> IndexPath {
        IndexPath::from(v.to_vec())
    }

    #[test]
    fn insert_shifts_selection() {
        let mut l = list(&["a", "b", "c"]);
        l.set_current_item(&[1]);
        l.insert_item(0, Entry::new("new", ""));
        assert_eq!(l.current_item(), &p(&[2]));
        assert_eq!(l.current_entry().unwrap().main_text, "b");
        l.insert_item(-1, Entry::new("end", ""));
        assert_eq!(l.current_item(), &p(&[2]));
    }

    #[test]
    fn remove_before_and_at_selection() {
        let mut l = list(&["a", "b", "c", "d"]);
        l.set_current_item(&[2]);
        l.remove_item(&[0]);
        assert_eq!(l.current_entry().unwrap().main_text, "c");

        l.remove_item(&[1]);
        assert_eq!(l.current_entry().unwrap().main_text, "d");

        l.remove_item(&[-1]);
        assert_eq!(l.current_item(), &p(&[0]));
        assert_eq!(l.current_entry().unwrap().main_text, "b");
    }

    #[test]
    fn remove_within_sublist() {
        let mut l = list(&["a"]);
        l.add_sub_item(Entry::new("a0", ""), true);
        l.add_sub_item(Entry::new("a1", ""), true);
        l.set_current_item(&[0, 1]);
        l.remove_item(&[0, 0]);
        assert_eq!(l.current_item(), &p(&[0, 0]));
        assert_eq!(l.current_entry().unwrap().main_text, "a1");
        l.remove_item(&[0, 0]);
        assert_eq!(l.current_item(), &p(&[0]));
    }

    #[test]
    fn collapsing_moves_selection_up() {
        let mut l = list(&["a", "b"]);
        l.add_sub_item(Entry::new("b0", ""), true);
        l.set_current_item(&[1, 0]);
        l.toggle_sub_list_display(1);
        assert_eq!(l.current_item(), &p(&[1]));
    }

    #[test]
    fn set_current_item_reveals() {
        let mut l = list(&["a"]);
        l.add_sub_item(Entry::new("a0", ""), false);
        l.set_current_item(&[0, 0]);
        assert_eq!(l.current_item(), &p(&[0, 0]));
        assert!(l.tree().get(0).unwrap().shows_children());
    }

    #[test]
    fn horizontal_scroll_keys() {
        let mut l = DeepList::new().with_config(ListConfig::default().with_secondary_text(false));
        l.add_item(Entry::new("abcdefghij", ""));
        l.add_item(Entry::new("b", ""));
        let mut tb = crate::TermBuf::empty(Expanse::new(4, 2));
        l.draw(&mut tb, Rect::new(0, 0, 4, 2), true).unwrap();

        assert!(l.handle_key(KeyCode::Right.into()));
        assert_eq!(l.offset(), (0, 2));
        assert_eq!(l.current_item(), &p(&[0]));
        assert!(l.handle_key(KeyCode::Left.into()));
        assert_eq!(l.offset(), (0, 0));
        assert!(l.handle_key(KeyCode::Left.into()));
        assert_eq!(l.current_item(), &p(&[1]));
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut l = list(&["a"]);
        assert!(!l.handle_key(KeyCode::PageUp.into()));
        assert!(!l.handle_key(key::Ctrl + 'x'));
        assert!(!l.handle_key('z'.into()));
        assert!(l.handle_key(KeyCode::Esc.into()));
    }

    #[test]
    fn modified_keys_are_not_bindings() {
        let activated = Rc::new(RefCell::new(0));
        let mut l = list(&["a", "b"]);
        let a = activated.clone();
        l.set_selected_func(move |_, _| *a.borrow_mut() += 1);

        assert!(!l.handle_key(key::Ctrl + KeyCode::Down));
        assert!(!l.handle_key(key::Alt + KeyCode::Enter));
        assert!(!l.handle_key(key::Alt + KeyCode::Esc));
        assert_eq!(l.current_item(), &p(&[0]));
        assert_eq!(*activated.borrow(), 0);

        assert!(l.handle_key(key::Shift + KeyCode::Tab));
        assert_eq!(l.current_item(), &p(&[1]));
    }

    #[test]
    fn action_can_edit_list() {
        let mut l = list(&["a"]);
        l.add_item(Entry::new("toggle", "").on_select(|l| {
            l.toggle_sub_list_display(1);
        }));
        l.add_sub_item(Entry::new("child", ""), false);
        l.set_current_item(&[1]);
        assert!(l.handle_key(KeyCode::Enter.into()));
        assert!(l.tree().get(1).unwrap().shows_children());
    }

    #[test]
    fn changed_raised_by_handler_is_delivered_after_it() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut l = list(&["a", "b", "c"]);
        let s = seen.clone();
        l.set_changed_func(move |l, sel| {
            s.borrow_mut().push(sel.path.to_string());
            if sel.path == p(&[1]) {
                l.set_current_item(&[2]);
                // Delivered once this handler returns.
                assert_eq!(s.borrow().len(), 1);
            }
        });
        l.handle_key(KeyCode::Down.into());
        assert_eq!(*seen.borrow(), vec!["[1]", "[2]"]);
        assert_eq!(l.current_item(), &p(&[2]));
    }

    #[test]
    fn handler_events_keep_their_order() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut l = list(&["a", "b"]);
        let s = seen.clone();
        l.set_changed_func(move |l, sel| {
            s.borrow_mut().push(format!("changed {}", sel.path));
            l.handle_key(KeyCode::Esc.into());
        });
        let s = seen.clone();
        l.set_done_func(move |_| s.borrow_mut().push("done".into()));
        l.handle_key(KeyCode::Down.into());
        assert_eq!(*seen.borrow(), vec!["changed [1]", "done"]);
    }

    #[test]
    fn mouse_click_and_scroll() {
        let mut l = DeepList::new().with_config(ListConfig::default().with_secondary_text(false));
        for i in 0..6 {
            l.add_item(Entry::new(format!("item {i}"), ""));
        }
        let area = Rect::new(0, 0, 10, 3);
        let mut tb = crate::TermBuf::empty(Expanse::new(10, 3));
        l.draw(&mut tb, area, true).unwrap();

        assert!(l.handle_mouse(MouseEvent::click((1, 2)), area));
        assert_eq!(l.current_item(), &p(&[2]));
        assert!(!l.handle_mouse(MouseEvent::click((1, 7)), area));

        for _ in 0..10 {
            l.handle_mouse(MouseEvent::at(mouse::Action::ScrollDown, (1, 1)), area);
        }
        assert_eq!(l.offset().0, 3);
        l.handle_mouse(MouseEvent::at(mouse::Action::ScrollUp, (1, 1)), area);
        assert_eq!(l.offset().0, 2);
        assert!(l.handle_mouse(MouseEvent::click(Point { x: 0, y: 0 }), area));
        assert_eq!(l.current_item(), &p(&[2]));
    }

    #[test]
    fn draw_rejects_area_off_canvas() {
        let mut l = list(&["a"]);
        let mut tb = crate::TermBuf::empty(Expanse::new(4, 2));
        assert!(matches!(
            l.draw(&mut tb, Rect::new(2, 0, 4, 2), true),
            Err(Error::Render(_))
        ));
    }
}
