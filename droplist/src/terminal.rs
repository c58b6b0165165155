use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::error::Result;
use crate::event::Event;
use crate::style::{Rgb, TextStyle};

/// A raw-mode terminal with mouse capture and double-buffered drawing.
///
/// The alternate screen and raw mode are restored when the value is dropped.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    /// Wait for input and return every event that is ready.
    ///
    /// With `None` this blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<Event>> {
        let mut raw = Vec::new();

        let ready = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };

        if ready {
            raw.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                raw.push(event::read()?);
            }
        }

        Ok(raw.into_iter().filter_map(Event::from_crossterm).collect())
    }

    /// Draw a frame and flush the cells that changed since the last one.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            log::debug!("terminal resized to {width}x{height}");
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut next_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.continuation {
                continue;
            }

            if y != last_y || x != next_x {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                bg = Some(cell.bg);
            }
            if cell.style != style {
                // Attributes don't have individual "off" codes that compose
                // cleanly, so reset and reapply colors.
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                style = cell.style;
            }

            write!(self.stdout, "{}", cell.symbol)?;

            last_y = y;
            next_x = x.saturating_add(cell.advance());
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
