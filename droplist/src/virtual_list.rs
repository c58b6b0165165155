//! Fixed-row-height list virtualization.
//!
//! Only rows that intersect the viewport are produced, so the work per frame
//! is proportional to the viewport, not to the row count. With uniform row
//! heights every position lookup is O(1) arithmetic.

use std::ops::Range;

/// Where a row sits inside the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub index: usize,
    /// Distance from the top of the content (not the viewport).
    pub offset: u32,
    pub height: u32,
}

impl RowSlot {
    /// Offset relative to the top of the viewport. Negative when the row is
    /// partially scrolled out above it.
    pub fn viewport_offset(&self, scroll_top: u32) -> i64 {
        self.offset as i64 - scroll_top as i64
    }
}

/// Scroll state and visible-window math for a list of uniform rows.
///
/// Units are whatever the caller lays out in; the dropdown uses terminal
/// cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualList {
    row_count: usize,
    row_height: u32,
    viewport_height: u32,
    scroll_top: u32,
    overscan: usize,
}

impl VirtualList {
    /// A zero row height is treated as 1.
    pub fn new(row_count: usize, row_height: u32, viewport_height: u32) -> Self {
        Self {
            row_count,
            row_height: row_height.max(1),
            viewport_height,
            scroll_top: 0,
            overscan: 0,
        }
    }

    /// Extra rows to produce beyond each edge of the viewport.
    pub fn with_overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Height of the spacer that holds every row.
    pub fn total_height(&self) -> u32 {
        let total = self.row_count as u64 * self.row_height as u64;
        total.min(u32::MAX as u64) as u32
    }

    pub fn max_scroll(&self) -> u32 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    /// Resize the viewport, keeping the scroll offset in range.
    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Scroll to `offset`, clamped to the scrollable range. Returns true if
    /// the position changed.
    pub fn scroll_to(&mut self, offset: u32) -> bool {
        let clamped = offset.min(self.max_scroll());
        if clamped == self.scroll_top {
            return false;
        }
        self.scroll_top = clamped;
        true
    }

    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let target = (self.scroll_top as i64)
            .saturating_add(delta)
            .clamp(0, u32::MAX as i64) as u32;
        self.scroll_to(target)
    }

    /// Scroll the minimum amount needed for row `index` to be fully visible.
    pub fn scroll_into_view(&mut self, index: usize) -> bool {
        if index >= self.row_count {
            return false;
        }
        let top = self.row_offset(index);
        let bottom = top.saturating_add(self.row_height);
        if top < self.scroll_top {
            self.scroll_to(top)
        } else if bottom > self.scroll_top.saturating_add(self.viewport_height) {
            self.scroll_to(bottom.saturating_sub(self.viewport_height))
        } else {
            false
        }
    }

    pub fn row_offset(&self, index: usize) -> u32 {
        let offset = index as u64 * self.row_height as u64;
        offset.min(u32::MAX as u64) as u32
    }

    /// Indices of the rows that intersect the viewport.
    ///
    /// The first row is `floor(scroll_top / row_height)` and the range ends
    /// before `ceil((scroll_top + viewport_height) / row_height)`: the row at
    /// that index starts at or below the bottom edge, so it isn't visible.
    /// Overscan widens the range on both sides.
    pub fn visible_range(&self) -> Range<usize> {
        if self.row_count == 0 || self.viewport_height == 0 {
            return 0..0;
        }

        let first = (self.scroll_top / self.row_height) as usize;
        let bottom = self.scroll_top as u64 + self.viewport_height as u64;
        let end = bottom.div_ceil(self.row_height as u64) as usize;

        let start = first.saturating_sub(self.overscan).min(self.row_count);
        let end = end.saturating_add(self.overscan).min(self.row_count);
        start..end
    }

    /// Layout slots for the visible rows.
    pub fn rows(&self) -> impl Iterator<Item = RowSlot> + '_ {
        self.visible_range().map(|index| RowSlot {
            index,
            offset: self.row_offset(index),
            height: self.row_height,
        })
    }

    /// Call `render_row` for each visible row and collect the results.
    pub fn render<R>(&self, mut render_row: impl FnMut(RowSlot) -> R) -> Vec<R> {
        self.rows().map(|slot| render_row(slot)).collect()
    }

    /// Row under a position measured from the top of the viewport.
    pub fn row_at(&self, y: u32) -> Option<usize> {
        if y >= self.viewport_height {
            return None;
        }
        let index = ((self.scroll_top as u64 + y as u64) / self.row_height as u64) as usize;
        (index < self.row_count).then_some(index)
    }
}
