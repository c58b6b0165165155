//! Input events the widgets understand, converted from crossterm.

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEventKind,
};

/// High-level input event in cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed.
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel. Positive `delta_y` scrolls down.
    Scroll { x: u16, y: u16, delta_y: i16 },
    /// Pointer moved, used for hover tracking.
    MouseMove { x: u16, y: u16 },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Convert a crossterm event. Returns `None` for events nothing here
    /// reacts to (key releases, drags, focus changes, paste).
    pub fn from_crossterm(event: CtEvent) -> Option<Self> {
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta_y: 1 }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta_y: -1 }),
                    MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }

    /// The pointer press carried by this event, if it is a click.
    pub fn pointer(&self) -> Option<PointerEvent> {
        match *self {
            Event::Click { x, y, button } => Some(PointerEvent { x, y, button }),
            _ => None,
        }
    }
}

/// A pointer press, as seen by document-level listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtButton> for MouseButton {
    fn from(btn: CtButton) -> Self {
        match btn {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}
