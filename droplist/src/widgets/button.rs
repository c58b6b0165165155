use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::{Palette, Rgb, TextStyle};
use crate::text::{display_width, truncate_to_width};

/// A one-line clickable surface with a centered label.
///
/// Rendering returns the rect that should be recorded for hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    background: Rgb,
    hover_background: Rgb,
    foreground: Rgb,
}

impl Button {
    pub fn new(label: impl Into<String>, palette: &Palette) -> Self {
        Self {
            label: label.into(),
            background: palette.button,
            hover_background: palette.button_hover,
            foreground: palette.button_text,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label plus one cell of padding on each side.
    pub fn width(&self) -> u16 {
        (display_width(&self.label) + 2).min(u16::MAX as usize) as u16
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, hovered: bool) -> Rect {
        let rect = Rect::new(area.x, area.y, self.width().min(area.width), area.height.min(1));
        if rect.is_empty() {
            return rect;
        }

        let bg = if hovered {
            self.hover_background
        } else {
            self.background
        };
        buf.fill(rect, bg);

        let label = truncate_to_width(&self.label, rect.width.saturating_sub(2) as usize);
        buf.set_string(
            rect.x + 1,
            rect.y,
            &label,
            rect.right().saturating_sub(1),
            self.foreground,
            TextStyle::new(),
        );
        rect
    }
}
