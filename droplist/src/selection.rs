//! Selection state for the dropdown.
//!
//! [`SelectionStore`] owns the chosen options and applies toggle semantics
//! for both modes. Every mutation ends with a notify step that hands the
//! full selection, in the order it was made, to the change callback.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::option::SelectOption;

/// How many labels the summary shows before cutting off.
pub const DEFAULT_SUMMARY_LIMIT: usize = 50;

/// Selection mode for the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one option; choosing another replaces it.
    #[default]
    Single,
    /// Any number of options.
    Multi,
}

/// Chosen options in the order they were chosen.
///
/// Membership is by option value, so lookups stay O(1) while iteration
/// follows selection order rather than list order.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    order: Vec<SelectOption>,
    values: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, option: &SelectOption) -> bool {
        self.values.contains(option.value())
    }

    /// Append `option` unless it is already present. Returns true if added.
    pub fn insert(&mut self, option: SelectOption) -> bool {
        if !self.values.insert(option.value().to_string()) {
            return false;
        }
        self.order.push(option);
        true
    }

    /// Returns true if the option was present.
    pub fn remove(&mut self, option: &SelectOption) -> bool {
        if !self.values.remove(option.value()) {
            return false;
        }
        self.order.retain(|o| o != option);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.order.iter()
    }
}

/// Callback invoked with the full selection after every mutation.
pub type ChangeCallback = Box<dyn FnMut(&[SelectOption])>;

/// Tracks which of the supplied options are chosen.
pub struct SelectionStore {
    mode: SelectionMode,
    options: Arc<[SelectOption]>,
    selected: SelectionSet,
    summary_limit: usize,
    on_change: Option<ChangeCallback>,
}

impl SelectionStore {
    pub fn new(mode: SelectionMode, options: impl Into<Arc<[SelectOption]>>) -> Self {
        Self {
            mode,
            options: options.into(),
            selected: SelectionSet::new(),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            on_change: None,
        }
    }

    /// Set the observer notified after every mutation.
    pub fn on_change(mut self, callback: impl FnMut(&[SelectOption]) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Current selection in the order it was made.
    pub fn selected(&self) -> &[SelectOption] {
        self.selected.as_slice()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected.contains(option)
    }

    /// True when every supplied option is chosen. An empty option list is
    /// never "all selected".
    pub fn all_selected(&self) -> bool {
        !self.options.is_empty() && self.selected.len() == self.options.len()
    }

    /// Select `option` if it isn't, deselect it if it is.
    ///
    /// Returns whether the option is selected afterwards.
    pub fn toggle_option(&mut self, option: &SelectOption) -> bool {
        let now_selected = if self.selected.contains(option) {
            self.selected.remove(option);
            false
        } else {
            if self.mode == SelectionMode::Single {
                self.selected.clear();
            }
            self.selected.insert(option.clone());
            true
        };

        log::trace!(
            "toggled {:?}: selected={now_selected}, total={}",
            option.value(),
            self.selected.len()
        );
        self.notify();
        now_selected
    }

    /// Select every supplied option, in list order. Multi-select only.
    pub fn select_all(&mut self) {
        if self.mode != SelectionMode::Multi {
            log::warn!("select_all ignored: dropdown is single-select");
            return;
        }

        self.selected.clear();
        for option in self.options.iter() {
            self.selected.insert(option.clone());
        }

        log::debug!("selected all {} options", self.selected.len());
        self.notify();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
        log::debug!("deselected all options");
        self.notify();
    }

    /// Deselect everything when all options are chosen, otherwise select
    /// all. Multi-select only.
    pub fn toggle_select_all(&mut self) {
        if self.mode != SelectionMode::Multi {
            log::warn!("toggle_select_all ignored: dropdown is single-select");
            return;
        }
        if self.all_selected() {
            self.deselect_all();
        } else {
            self.select_all();
        }
    }

    /// Labels of the first `summary_limit` selections joined by `", "`.
    ///
    /// `None` when nothing is selected.
    pub fn summary(&self) -> Option<String> {
        if self.selected.is_empty() {
            return None;
        }
        let labels: Vec<&str> = self
            .selected
            .iter()
            .take(self.summary_limit)
            .map(SelectOption::label)
            .collect();
        Some(labels.join(", "))
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.selected.as_slice());
        }
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("mode", &self.mode)
            .field("options", &self.options.len())
            .field("selected", &self.selected)
            .field("summary_limit", &self.summary_limit)
            .finish_non_exhaustive()
    }
}
