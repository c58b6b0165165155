//! Rendering for the dropdown.
//!
//! Layout, top to bottom:
//!
//! ```text
//! ╭──────────────────────────╮
//! │ Red, Blue              ▴ │   trigger
//! ╰──────────────────────────╯
//! ╭──────────────────────────╮
//! │ Select all               │   multi-select only
//! │                          │
//! │ Red                    ✓ │   visible rows only
//! │ Blue                   ✓ │
//! ╰──────────────────────────╯
//! ```

use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::option::SelectOption;
use crate::selection::SelectionMode;
use crate::style::{Palette, TextStyle};
use crate::text::truncate_to_width;
use crate::widgets::{Button, Panel};

use super::{Dropdown, Target};

const TRIGGER_HEIGHT: u16 = 3;
/// Button row plus a spacer row.
const CONTROLS_HEIGHT: u16 = 2;
const CARET_OPEN: char = '▴';
const CARET_CLOSED: char = '▾';
const CHECK: &str = "✓";

impl Dropdown {
    /// Draw the dropdown with its trigger at the top-left of `area`.
    ///
    /// The open panel hangs below the trigger and may extend past `area`,
    /// drawing over whatever was painted there. Clickable regions and the
    /// root region used for outside-click dismissal are refreshed on every
    /// call; the panel's place in the root region is recorded even while
    /// closed.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect) {
        self.hits.clear();

        let width = self.config.width.cells().min(area.width);
        let trigger_area = Rect::new(area.x, area.y, width, TRIGGER_HEIGHT.min(area.height))
            .intersection(buf.area());
        self.render_trigger(buf, trigger_area);
        self.hits.push(trigger_area, Target::Trigger);

        let panel_area = Rect::new(area.x, trigger_area.bottom(), width, self.panel_height())
            .intersection(buf.area());
        if self.is_open() {
            self.render_panel(buf, panel_area);
        } else {
            self.hovered = None;
        }
        self.popover.set_region([trigger_area]);
        self.popover.set_panel(panel_area);
    }

    /// Full height of the open panel, including border and controls.
    pub fn panel_height(&self) -> u16 {
        let panel = Panel::new(&self.config.palette);
        let controls = if self.store.mode() == SelectionMode::Multi {
            CONTROLS_HEIGHT
        } else {
            0
        };
        panel
            .vertical_chrome()
            .saturating_add(controls)
            .saturating_add(self.config.viewport_height())
    }

    fn render_trigger(&self, buf: &mut Buffer, area: Rect) {
        let palette = &self.config.palette;
        let inner = Panel::new(palette).render(buf, area);
        if inner.is_empty() {
            return;
        }

        // Caret takes the last column, with one column of space before it.
        let text_width = inner.width.saturating_sub(2);
        let (text, fg, style) = match self.store.summary() {
            Some(summary) => (summary, palette.text, TextStyle::new()),
            None => (
                self.config.placeholder.clone(),
                palette.muted,
                TextStyle {
                    dim: true,
                    ..TextStyle::new()
                },
            ),
        };
        let text = truncate_to_width(&text, text_width as usize);
        buf.set_string(inner.x, inner.y, &text, inner.x + text_width, fg, style);

        let caret = if self.is_open() {
            CARET_OPEN
        } else {
            CARET_CLOSED
        };
        let mut glyph = [0u8; 4];
        buf.set_string(
            inner.right() - 1,
            inner.y,
            caret.encode_utf8(&mut glyph),
            inner.right(),
            palette.muted,
            TextStyle::new(),
        );
    }

    fn render_panel(&mut self, buf: &mut Buffer, area: Rect) {
        let palette = self.config.palette;
        let inner = Panel::new(&palette).render(buf, area);
        self.hits.push(area, Target::Panel);

        let mut list_area = inner;
        if self.store.mode() == SelectionMode::Multi {
            let (controls, rest) = inner.split_top(CONTROLS_HEIGHT);
            let label = if self.store.all_selected() {
                "Deselect all"
            } else {
                "Select all"
            };
            let hovered = self.hovered == Some(Target::SelectAll);
            let rect = Button::new(label, &palette).render(buf, controls, hovered);
            self.hits.push(rect, Target::SelectAll);
            list_area = rest;
        }

        self.render_list(buf, list_area);
    }

    fn render_list(&mut self, buf: &mut Buffer, area: Rect) {
        self.list.set_viewport_height(area.height as u32);
        self.hits.push(area, Target::List);
        if area.is_empty() {
            return;
        }

        let palette = self.config.palette;
        let scroll_top = self.list.scroll_top();
        let hovered = self.hovered;
        let store = &self.store;
        let hits = &mut self.hits;

        let drawn = self.list.render(|slot| {
            // Clip rows partially scrolled past either edge.
            let top = area.y as i64 + slot.viewport_offset(scroll_top);
            let bottom = top + slot.height as i64;
            let y0 = top.max(area.y as i64) as u16;
            let y1 = bottom.min(area.bottom() as i64) as u16;
            if y1 <= y0 {
                return false;
            }
            let rect = Rect::new(area.x, y0, area.width, y1 - y0);
            let label_y = top + (slot.height as i64 - 1) / 2;

            let Some(option) = store.options().get(slot.index) else {
                return false;
            };
            let row = RowView {
                option,
                selected: store.is_selected(option),
                hovered: hovered == Some(Target::Row(slot.index)),
            };
            row.render(buf, rect, label_y, &palette);
            hits.push(rect, Target::Row(slot.index));
            true
        });

        log::trace!(
            "rendered {} of {} rows at scroll {}",
            drawn.iter().filter(|d| **d).count(),
            self.list.row_count(),
            scroll_top
        );
    }
}

struct RowView<'a> {
    option: &'a SelectOption,
    selected: bool,
    hovered: bool,
}

impl RowView<'_> {
    fn render(&self, buf: &mut Buffer, rect: Rect, label_y: i64, palette: &Palette) {
        let bg = if self.selected {
            palette.selected
        } else if self.hovered {
            palette.hover
        } else {
            palette.surface
        };
        buf.fill(rect, bg);

        if label_y < rect.y as i64 || label_y >= rect.bottom() as i64 {
            return;
        }
        let label_y = label_y as u16;

        let label_width = rect.width.saturating_sub(2);
        let label = truncate_to_width(self.option.label(), label_width as usize);
        buf.set_string(
            rect.x,
            label_y,
            &label,
            rect.x + label_width,
            palette.text,
            TextStyle::new(),
        );
        if self.selected && rect.width > 0 {
            buf.set_string(
                rect.right() - 1,
                label_y,
                CHECK,
                rect.right(),
                palette.text,
                TextStyle::new().bold(),
            );
        }
    }
}
