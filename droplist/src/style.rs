//! Colors, text attributes and the palette the widgets draw with.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    None,
    #[default]
    Rounded,
}

impl Border {
    /// Corner and edge glyphs: `(tl, tr, bl, br, horizontal, vertical)`.
    pub(crate) fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
        }
    }

    pub fn size(self) -> u16 {
        if self == Border::None { 0 } else { 1 }
    }
}

/// Colors used by the dropdown and its wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub surface: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub selected: Rgb,
    pub hover: Rgb,
    pub button: Rgb,
    pub button_hover: Rgb,
    pub button_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            surface: Rgb::new(255, 255, 255),
            border: Rgb::new(209, 213, 219),
            text: Rgb::new(17, 24, 39),
            muted: Rgb::new(75, 85, 99),
            selected: Rgb::new(224, 242, 254),
            hover: Rgb::new(240, 249, 255),
            button: Rgb::new(229, 231, 235),
            button_hover: Rgb::new(209, 213, 219),
            button_text: Rgb::new(17, 24, 39),
        }
    }
}
