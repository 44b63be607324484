//! Row planning and painting.
//!
//! Drawing happens in two steps. [`plan`] flattens the visible part of the
//! tree into a [`RenderPlan`], a plain list of rows with the text and path
//! each one shows. The plan is then painted onto any [`Canvas`], and the
//! same rows answer pointer hit-tests.

use crate::{
    canvas::Canvas,
    config::ListConfig,
    geom::{Line, Point, Rect},
    path::IndexPath,
    text::{self, Span},
    tree::Entry,
    viewport::{Viewport, flat_rows},
};

/// Width of the shortcut gutter.
const GUTTER: u32 = 4;

/// Which part of an entry a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Main text of a top-level entry.
    Main,
    /// Secondary text of a top-level entry.
    Secondary,
    /// Main text of a sub-item.
    SubItem,
}

/// One screen row of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRow<'a> {
    /// Row offset from the top of the area.
    pub y: u32,
    /// The entry this row belongs to.
    pub path: IndexPath,
    /// Which part of the entry is shown.
    pub kind: RowKind,
    /// The full text of the row, before horizontal scrolling.
    pub text: &'a str,
    /// Shortcut shown in the gutter, main rows only.
    pub shortcut: Option<char>,
    /// The visible part of the text.
    pub span: Span,
}

/// The rows to draw for one frame.
#[derive(Debug, Clone)]
pub struct RenderPlan<'a> {
    /// Rows from top to bottom.
    pub rows: Vec<PlannedRow<'a>>,
    /// The area being drawn.
    pub area: Rect,
    /// Width reserved for shortcuts on the left.
    pub gutter: u32,
    /// Horizontal offset the rows were measured with.
    pub horizontal_offset: usize,
    /// Widest printed text in cells.
    pub max_width: usize,
    /// Did any row's text run past the right edge?
    pub overflowing: bool,
}

/// Plan the rows for a frame.
///
/// If the list is scrolled horizontally but even the widest row leaves empty
/// columns on the right, the horizontal offset is reduced by that slack and
/// the rows are planned once more.
pub fn plan<'a>(
    items: &'a [Entry],
    config: &ListConfig,
    viewport: &Viewport,
    area: Rect,
) -> RenderPlan<'a> {
    let first = plan_once(
        items,
        config,
        viewport.item_offset,
        viewport.horizontal_offset,
        area,
    );
    let width = first.text_width() as usize;
    if first.horizontal_offset > 0 && first.max_width < width {
        let offset = first
            .horizontal_offset
            .saturating_sub(width - first.max_width);
        tracing::trace!(
            "horizontal offset {} -> {}",
            first.horizontal_offset,
            offset
        );
        return plan_once(items, config, viewport.item_offset, offset, area);
    }
    first
}

/// Plan the rows for a frame at a fixed horizontal offset.
fn plan_once<'a>(
    items: &'a [Entry],
    config: &ListConfig,
    item_offset: usize,
    horizontal_offset: usize,
    area: Rect,
) -> RenderPlan<'a> {
    let gutter = if items.iter().any(|e| e.shortcut.is_some()) {
        GUTTER.min(area.w)
    } else {
        0
    };
    let mut plan = RenderPlan {
        rows: Vec::new(),
        area,
        gutter,
        horizontal_offset,
        max_width: 0,
        overflowing: false,
    };
    let mut y = 0;
    for flat in flat_rows(items).skip(item_offset) {
        if y >= area.h {
            break;
        }
        let entry = &items[flat.top];
        match flat.sub {
            None => {
                let path = IndexPath::top_level(flat.top);
                plan.push(y, path.clone(), RowKind::Main, &entry.main_text);
                if let Some(row) = plan.rows.last_mut() {
                    row.shortcut = entry.shortcut;
                }
                y += 1;
                if config.show_secondary_text {
                    if y >= area.h {
                        break;
                    }
                    plan.push(y, path, RowKind::Secondary, &entry.secondary_text);
                    y += 1;
                }
            }
            Some(j) => {
                if let Some(child) = entry.children().get(j) {
                    let path = IndexPath::from(vec![flat.top, j]);
                    plan.push(y, path, RowKind::SubItem, &child.main_text);
                    y += 1;
                }
            }
        }
    }
    plan
}

impl<'a> RenderPlan<'a> {
    /// Width of the text column.
    pub fn text_width(&self) -> u32 {
        self.area.w - self.gutter
    }

    /// Measure and record a row.
    fn push(&mut self, y: u32, path: IndexPath, kind: RowKind, text: &'a str) {
        let span = text::column_span(text, self.horizontal_offset, self.text_width() as usize);
        self.max_width = self.max_width.max(span.width);
        self.overflowing |= span.clipped(text);
        self.rows.push(PlannedRow {
            y,
            path,
            kind,
            text,
            shortcut: None,
            span,
        });
    }

    /// The path of the entry shown at a screen point, if any.
    pub fn path_at(&self, p: Point) -> Option<&IndexPath> {
        if !self.area.contains_point(p) {
            return None;
        }
        let y = p.y - self.area.tl.y;
        self.rows.iter().find(|r| r.y == y).map(|r| &r.path)
    }

    /// Paint the plan. The row of the selected top-level entry is
    /// highlighted unless highlighting is restricted to focus and the list
    /// is not focused.
    pub fn paint(
        &self,
        canvas: &mut dyn Canvas,
        config: &ListConfig,
        selected_top: usize,
        focused: bool,
    ) {
        let styles = &config.styles;
        let area = self.area;
        let text_x = area.tl.x + self.gutter;
        let text_w = self.text_width();
        canvas.fill(styles.main_text, area, ' ');

        let highlight = focused || !config.selected_focus_only;
        for row in &self.rows {
            let y = area.tl.y + row.y;
            if let Some(c) = row.shortcut {
                canvas.print(
                    styles.shortcut,
                    Line::new(area.tl.x, y, self.gutter),
                    0,
                    &format!("({c})"),
                );
            }
            let style = match row.kind {
                RowKind::Main => styles.main_text,
                RowKind::Secondary | RowKind::SubItem => styles.secondary_text,
            };
            canvas.print(
                style,
                Line::new(text_x, y, text_w),
                self.horizontal_offset,
                row.text,
            );

            if highlight && row.kind == RowKind::Main && row.path.top() == selected_top {
                let width = if config.highlight_full_line {
                    text_w
                } else {
                    (text::display_width(row.text) as u32).min(text_w)
                };
                for x in text_x..text_x + width {
                    let p = Point { x, y };
                    let Some(fg) = canvas.cell(p).map(|c| c.style.fg) else {
                        continue;
                    };
                    let mut selected = styles.selected;
                    if fg != styles.main_text.fg {
                        selected.fg = fg;
                    }
                    canvas.set_style(p, selected);
                }
            }
        }
    }
}
