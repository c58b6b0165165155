//! Event handling for the dropdown.

use crate::event::{Event, Key, Modifiers, MouseButton};

use super::{Dropdown, Target};

/// Whether the dropdown acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl Dropdown {
    /// React to an input event.
    ///
    /// Outside-click dismissal is not handled here; it runs through the
    /// [`PointerListeners`](crate::PointerListeners) the dropdown is mounted
    /// on, which the host dispatches before routing the press.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.on_click(x, y),
            Event::Scroll { x, y, delta_y } => self.on_scroll(x, y, delta_y),
            Event::MouseMove { x, y } => {
                self.hovered = self.hit_test(x, y);
                EventResult::Ignored
            }
            Event::Key { key, modifiers } => self.on_key(key, modifiers),
            Event::Click { .. } | Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn on_click(&mut self, x: u16, y: u16) -> EventResult {
        let Some(target) = self.hit_test(x, y) else {
            return EventResult::Ignored;
        };
        log::debug!("click on {target:?}");

        match target {
            Target::Trigger => self.toggle_open(),
            Target::SelectAll => self.toggle_select_all(),
            Target::Row(index) => {
                self.toggle_index(index);
            }
            Target::Panel | Target::List => {}
        }
        EventResult::Consumed
    }

    fn on_scroll(&mut self, x: u16, y: u16, delta_y: i16) -> EventResult {
        match self.hit_test(x, y) {
            Some(Target::List | Target::Row(_)) => {
                let step = self.list.row_height() as i64;
                self.list.scroll_by(delta_y as i64 * step);
                EventResult::Consumed
            }
            Some(Target::Panel | Target::SelectAll) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if !self.is_open() || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let row = self.list.row_height() as i64;
        let page = self.list.viewport_height() as i64;
        match key {
            Key::Escape => {
                self.close();
            }
            Key::Up => {
                self.list.scroll_by(-row);
            }
            Key::Down => {
                self.list.scroll_by(row);
            }
            Key::PageUp => {
                self.list.scroll_by(-page);
            }
            Key::PageDown => {
                self.list.scroll_by(page);
            }
            Key::Home => {
                self.list.scroll_to(0);
            }
            Key::End => {
                let max = self.list.max_scroll();
                self.list.scroll_to(max);
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}
