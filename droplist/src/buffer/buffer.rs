use super::Cell;
use crate::geometry::Rect;
use crate::style::{Border, Rgb, TextStyle};
use crate::text::char_width;

/// A grid of styled cells that widgets draw into.
///
/// The terminal keeps two of these and flushes only the cells that differ
/// between frames.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::BLANK; (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells of `self` that differ from `other`, with their positions.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Paint the background of every cell in `rect`, blanking its content.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        let rect = rect.intersection(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, Cell::blank(bg));
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_x`.
    ///
    /// The background of each cell is preserved. Returns the column after the
    /// last written glyph.
    pub fn set_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_x: u16,
        fg: Rgb,
        style: TextStyle,
    ) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx.saturating_add(w) > max_x {
                break;
            }
            let bg = self.get(cx, y).map(|c| c.bg).unwrap_or_default();
            self.set(cx, y, Cell::glyph(ch, fg, bg, style));
            if w == 2 {
                self.set(cx + 1, y, Cell::continuation(bg));
            }
            cx += w;
        }
        cx
    }

    /// Draw a border around the edge of `rect`.
    pub fn draw_border(&mut self, rect: Rect, border: Border, fg: Rgb) {
        let Some((tl, tr, bl, br, h, v)) = border.glyphs() else {
            return;
        };
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.set_glyph(rect.x, rect.y, tl, fg);
        self.set_glyph(right, rect.y, tr, fg);
        self.set_glyph(rect.x, bottom, bl, fg);
        self.set_glyph(right, bottom, br, fg);

        for x in (rect.x + 1)..right {
            self.set_glyph(x, rect.y, h, fg);
            self.set_glyph(x, bottom, h, fg);
        }
        for y in (rect.y + 1)..bottom {
            self.set_glyph(rect.x, y, v, fg);
            self.set_glyph(right, y, v, fg);
        }
    }

    fn set_glyph(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.symbol = ch;
            cell.fg = fg;
        }
    }

    /// The characters of row `y` between `x` and `x + width`, for assertions
    /// and debugging.
    pub fn row_text(&self, x: u16, y: u16, width: u16) -> String {
        (x..x.saturating_add(width))
            .filter_map(|cx| self.get(cx, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect()
    }
}
