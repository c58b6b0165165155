use crate::selection::{DEFAULT_SUMMARY_LIMIT, SelectionMode};
use crate::style::Palette;

/// Predefined panel widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthTag {
    Sm,
    #[default]
    Md,
    Lg,
}

impl WidthTag {
    /// Width in cells.
    pub fn cells(self) -> u16 {
        match self {
            WidthTag::Sm => 16,
            WidthTag::Md => 28,
            WidthTag::Lg => 38,
        }
    }
}

/// Predefined heights for the list viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightTag {
    #[default]
    Sm,
    Md,
    Lg,
}

impl HeightTag {
    /// Viewport height in cells.
    pub fn cells(self) -> u16 {
        match self {
            HeightTag::Sm => 8,
            HeightTag::Md => 16,
            HeightTag::Lg => 24,
        }
    }
}

/// Construction-time settings for a [`Dropdown`](super::Dropdown).
///
/// # Example
///
/// ```
/// use droplist::{DropdownConfig, HeightTag, WidthTag};
///
/// let config = DropdownConfig::new()
///     .width(WidthTag::Lg)
///     .height(HeightTag::Md)
///     .multi_select(true);
/// assert_eq!(config.viewport_height(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    pub width: WidthTag,
    pub height: HeightTag,
    pub multi_select: bool,
    pub placeholder: String,
    pub summary_limit: usize,
    /// Cells per option row.
    pub row_height: u16,
    pub palette: Palette,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            width: WidthTag::default(),
            height: HeightTag::default(),
            multi_select: false,
            placeholder: "Select...".to_string(),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            row_height: 1,
            palette: Palette::default(),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: WidthTag) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: HeightTag) -> Self {
        self.height = height;
        self
    }

    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    pub fn row_height(mut self, rows: u16) -> Self {
        self.row_height = rows.max(1);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn selection_mode(&self) -> SelectionMode {
        if self.multi_select {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    pub fn viewport_height(&self) -> u16 {
        self.height.cells()
    }
}
