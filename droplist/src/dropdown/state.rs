//! Dropdown state and operations.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::hit::HitMap;
use crate::option::SelectOption;
use crate::popover::{DisplayState, PointerListeners, Popover, Subscription};
use crate::selection::{SelectionMode, SelectionStore};
use crate::virtual_list::VirtualList;

use super::DropdownConfig;

/// What a screen position inside the dropdown refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The always-visible summary panel.
    Trigger,
    /// The select-all / deselect-all button.
    SelectAll,
    /// Open panel background.
    Panel,
    /// List viewport, between or behind rows.
    List,
    /// An option row by index into the option list.
    Row(usize),
}

/// A selectable dropdown list.
///
/// The dropdown owns its [`SelectionStore`] and open/closed state, and draws
/// itself with only the visible option rows materialized. Mount it on the
/// host's [`PointerListeners`] to get outside-click dismissal.
///
/// # Example
///
/// ```
/// use droplist::{Dropdown, DropdownConfig, SelectOption};
///
/// let options = vec![SelectOption::new("Red", "red"), SelectOption::new("Blue", "blue")];
/// let mut dropdown = Dropdown::new(DropdownConfig::new(), options, |selected| {
///     println!("{} selected", selected.len());
/// });
///
/// dropdown.toggle_open();
/// dropdown.toggle_index(0);
/// assert_eq!(dropdown.display_text(), "Red");
/// ```
pub struct Dropdown {
    pub(super) config: DropdownConfig,
    pub(super) store: SelectionStore,
    pub(super) list: VirtualList,
    pub(super) popover: Rc<Popover>,
    pub(super) hits: HitMap<Target>,
    /// Reset whenever the panel opens or a closed frame is drawn.
    pub(super) hovered: Option<Target>,
    subscription: Option<Subscription>,
}

impl Dropdown {
    pub fn new(
        config: DropdownConfig,
        options: impl Into<Arc<[SelectOption]>>,
        on_change: impl FnMut(&[SelectOption]) + 'static,
    ) -> Self {
        let options: Arc<[SelectOption]> = options.into();
        let list = VirtualList::new(
            options.len(),
            config.row_height as u32,
            config.viewport_height() as u32,
        );
        let store = SelectionStore::new(config.selection_mode(), options)
            .summary_limit(config.summary_limit)
            .on_change(on_change);

        Self {
            config,
            store,
            list,
            popover: Rc::new(Popover::new()),
            hits: HitMap::new(),
            hovered: None,
            subscription: None,
        }
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn options(&self) -> &[SelectOption] {
        self.store.options()
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    // -------------------------------------------------------------------------
    // Mounting
    // -------------------------------------------------------------------------

    /// Install the outside-click listener. Remounting replaces the previous
    /// subscription.
    pub fn mount(&mut self, listeners: &PointerListeners) {
        let popover = Rc::clone(&self.popover);
        let subscription = listeners.subscribe(move |event| {
            popover.dismiss_outside(event);
        });
        self.subscription = Some(subscription);
    }

    /// Remove the outside-click listener. Also happens on drop.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    // -------------------------------------------------------------------------
    // Display state
    // -------------------------------------------------------------------------

    pub fn display_state(&self) -> DisplayState {
        self.popover.state()
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    pub fn toggle_open(&mut self) {
        self.popover.toggle_open();
        self.hovered = None;
    }

    pub fn open(&mut self) {
        self.popover.open();
        self.hovered = None;
    }

    pub fn close(&mut self) {
        self.popover.close();
        self.hovered = None;
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection_mode(&self) -> SelectionMode {
        self.store.mode()
    }

    pub fn selected(&self) -> &[SelectOption] {
        self.store.selected()
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.store.is_selected(option)
    }

    pub fn toggle_option(&mut self, option: &SelectOption) -> bool {
        self.store.toggle_option(option)
    }

    /// Toggle the option at `index`. `None` if the index is out of range.
    pub fn toggle_index(&mut self, index: usize) -> Option<bool> {
        let option = self.store.options().get(index)?.clone();
        Some(self.store.toggle_option(&option))
    }

    pub fn select_all(&mut self) {
        self.store.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.store.deselect_all();
    }

    pub fn toggle_select_all(&mut self) {
        self.store.toggle_select_all();
    }

    pub fn summary(&self) -> Option<String> {
        self.store.summary()
    }

    /// Summary of the selection, or the placeholder when nothing is chosen.
    pub fn display_text(&self) -> String {
        self.store
            .summary()
            .unwrap_or_else(|| self.config.placeholder.clone())
    }

    // -------------------------------------------------------------------------
    // Hit testing
    // -------------------------------------------------------------------------

    /// Target under a position, as of the last render. Only the trigger
    /// responds while the panel is closed.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Target> {
        let target = self.hits.hit_test(x, y)?;
        if self.is_open() || target == Target::Trigger {
            Some(target)
        } else {
            None
        }
    }

    /// Whether a position falls inside the widget's root region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.popover.contains(x, y)
    }
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("list", &self.list)
            .field("state", &self.popover.state())
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}
