use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::{Border, Palette, Rgb};

/// A bordered, filled container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub border: Border,
    pub background: Rgb,
    pub border_color: Rgb,
    /// Horizontal padding inside the border.
    pub padding_x: u16,
    /// Vertical padding inside the border.
    pub padding_y: u16,
}

impl Panel {
    pub fn new(palette: &Palette) -> Self {
        Self {
            border: Border::Rounded,
            background: palette.surface,
            border_color: palette.border,
            padding_x: 1,
            padding_y: 0,
        }
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn padding(mut self, x: u16, y: u16) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    /// Rows the border and padding take up, top and bottom combined.
    pub fn vertical_chrome(&self) -> u16 {
        2 * (self.border.size() + self.padding_y)
    }

    /// The content area left inside `area`.
    pub fn inner(&self, area: Rect) -> Rect {
        let v = self.border.size() + self.padding_y;
        let h = self.border.size() + self.padding_x;
        area.shrink(v, h, v, h)
    }

    /// Paint the panel and return its content area.
    pub fn render(&self, buf: &mut Buffer, area: Rect) -> Rect {
        buf.fill(area, self.background);
        buf.draw_border(area, self.border, self.border_color);
        self.inner(area)
    }
}
