//! Open/closed state and outside-click dismissal.
//!
//! The host owns a [`PointerListeners`] registry and dispatches every pointer
//! press to it before routing the press to the widget under the pointer
//! (capture phase). A mounted dropdown holds a [`Subscription`] in that
//! registry; dropping the subscription removes the listener.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::PointerEvent;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Closed,
    Open,
}

impl DisplayState {
    pub fn toggled(self) -> Self {
        match self {
            DisplayState::Closed => DisplayState::Open,
            DisplayState::Open => DisplayState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == DisplayState::Open
    }
}

/// Display state plus the screen region the widget occupies.
///
/// The region is split in two: the always-visible part, and the panel that
/// only counts while open. The panel rect is laid out on every render, even
/// a closed one, so a press on it right after opening is still inside.
///
/// Shared between the widget and its outside-click listener.
#[derive(Debug, Default)]
pub struct Popover {
    state: Cell<DisplayState>,
    region: RefCell<Vec<Rect>>,
    panel: Cell<Rect>,
}

impl Popover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisplayState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle_open(&self) {
        let next = self.state.get().toggled();
        log::debug!("popover {:?}", next);
        self.state.set(next);
    }

    pub fn open(&self) {
        self.state.set(DisplayState::Open);
    }

    pub fn close(&self) {
        if self.state.replace(DisplayState::Closed).is_open() {
            log::debug!("popover Closed");
        }
    }

    /// Replace the rects that make up the widget's root region.
    pub fn set_region(&self, rects: impl IntoIterator<Item = Rect>) {
        let mut region = self.region.borrow_mut();
        region.clear();
        region.extend(rects.into_iter().filter(|r| !r.is_empty()));
    }

    /// Set where the panel sits when open.
    pub fn set_panel(&self, rect: Rect) {
        self.panel.set(rect);
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        if self.is_open() && self.panel.get().contains(x, y) {
            return true;
        }
        self.region.borrow().iter().any(|r| r.contains(x, y))
    }

    /// Close when a press lands outside the region. Returns true if this
    /// press dismissed the popover.
    pub fn dismiss_outside(&self, event: &PointerEvent) -> bool {
        if self.is_open() && !self.contains(event.x, event.y) {
            log::debug!("press at ({}, {}) outside dropdown", event.x, event.y);
            self.close();
            return true;
        }
        false
    }
}

type Listener = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Document-level pointer listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct PointerListeners {
    registry: Rc<RefCell<Registry>>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `listener` until the returned guard is dropped.
    #[must_use = "the listener is removed as soon as the subscription is dropped"]
    pub fn subscribe(&self, listener: impl Fn(&PointerEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        log::trace!("pointer listener {id} subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a press to every listener, in subscription order.
    pub fn dispatch(&self, event: &PointerEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for PointerListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerListeners")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Keeps a pointer listener installed. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != self.id);
        log::trace!("pointer listener {} unsubscribed", self.id);
    }
}
