use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell: a glyph drawn over a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width glyph that starts in the cell to the
    /// left. Never written to the terminal on its own.
    pub continuation: bool,
}

impl Cell {
    /// What a cleared buffer holds.
    pub const BLANK: Cell = Cell::blank(DEFAULT_BG);

    /// An empty cell painted with `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            symbol: ' ',
            fg: DEFAULT_FG,
            bg,
            style: TextStyle::new(),
            continuation: false,
        }
    }

    pub const fn glyph(symbol: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            symbol,
            fg,
            bg,
            style,
            continuation: false,
        }
    }

    /// Filler behind the right half of a wide glyph.
    pub const fn continuation(bg: Rgb) -> Self {
        Self {
            continuation: true,
            ..Self::blank(bg)
        }
    }

    /// Columns the cursor moves after writing this cell.
    pub fn advance(&self) -> u16 {
        char_width(self.symbol).max(1) as u16
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
