//! Per-category display filters and per-todo detail toggles.
//!
//! Filter entries are created the first time a category is observed and are
//! never removed during a session, so a category that is emptied and refilled
//! keeps the state the user gave it.

use super::store::StoreError;
use super::todo::TodoId;
use std::collections::{HashMap, HashSet};

/// View state of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterEntry {
    pub expanded: bool,
    pub show_completed: bool,
}

impl Default for FilterEntry {
    fn default() -> Self {
        FilterEntry {
            expanded: true,
            show_completed: false,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CategoryFilters {
    entries: HashMap<String, FilterEntry>,
}

impl CategoryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    pub fn get(&self, category: &str) -> Option<FilterEntry> {
        self.entries.get(category).copied()
    }

    /// Creates the default entry for a category unless one exists.
    /// Returns `true` if an entry was created.
    pub(crate) fn observe(&mut self, category: &str) -> bool {
        if self.entries.contains_key(category) {
            return false;
        }
        self.entries.insert(category.to_string(), FilterEntry::default());
        true
    }

    /// Flips `expanded` and returns the new value.
    pub fn toggle_expand(&mut self, category: &str) -> Result<bool, StoreError> {
        let entry = self.entry_mut(category)?;
        entry.expanded = !entry.expanded;
        Ok(entry.expanded)
    }

    /// Flips `show_completed` and returns the new value.
    pub fn toggle_show_completed(&mut self, category: &str) -> Result<bool, StoreError> {
        let entry = self.entry_mut(category)?;
        entry.show_completed = !entry.show_completed;
        Ok(entry.show_completed)
    }

    pub fn is_expanded(&self, category: &str) -> Result<bool, StoreError> {
        Ok(self.entry(category)?.expanded)
    }

    pub fn show_completed(&self, category: &str) -> Result<bool, StoreError> {
        Ok(self.entry(category)?.show_completed)
    }

    fn entry(&self, category: &str) -> Result<&FilterEntry, StoreError> {
        self.entries
            .get(category)
            .ok_or_else(|| StoreError::UnknownCategory(category.to_string()))
    }

    fn entry_mut(&mut self, category: &str) -> Result<&mut FilterEntry, StoreError> {
        self.entries
            .get_mut(category)
            .ok_or_else(|| StoreError::UnknownCategory(category.to_string()))
    }
}

/// Which todos currently show their details. Collapsed is the default.
#[derive(Debug, Default, Clone)]
pub struct DetailToggles {
    expanded: HashSet<TodoId>,
}

impl DetailToggles {
    pub fn is_expanded(&self, id: TodoId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flips the flag and returns the new value.
    pub(crate) fn toggle(&mut self, id: TodoId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub(crate) fn forget(&mut self, id: TodoId) {
        self.expanded.remove(&id);
    }

    pub(crate) fn retain(&mut self, keep: impl Fn(TodoId) -> bool) {
        self.expanded.retain(|&id| keep(id));
    }
}
