//! The two synchronized todo indexes.
//!
//! [`TodoIndex`] owns every loaded todo in a by-identifier map and keeps a
//! by-category map of identifier buckets next to it. Buckets hold identifiers
//! only, so a todo exists once and both views always agree on its contents.
//!
//! Invariant: an identifier is in `by_id` if and only if it appears exactly once
//! in the bucket named by that todo's `category`. All mutating methods are
//! crate-private and preserve it; [`TodoIndex::is_consistent`] checks it.

use super::todo::{Todo, TodoId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

#[derive(Debug, Default, Clone)]
pub struct TodoIndex {
    by_id: HashMap<TodoId, Todo>,
    by_category: BTreeMap<String, Vec<TodoId>>,
}

/// What a bulk replace observed while rebuilding the indexes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReplaceReport {
    /// Categories seen in the new data, in first-seen order.
    pub categories: Vec<String>,
    /// Identifiers that occurred more than once; the last occurrence won.
    pub duplicates: Vec<TodoId>,
}

impl TodoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Known categories in sorted order. Emptied buckets stay listed for the session.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.by_category.contains_key(category)
    }

    /// Todos of one category in insertion order.
    pub fn bucket<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Todo> + 'a {
        self.by_category
            .get(category)
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.by_id.get(id))
    }

    pub fn bucket_len(&self, category: &str) -> usize {
        self.by_category.get(category).map_or(0, Vec::len)
    }

    /// Checks the bidirectional index invariant.
    pub fn is_consistent(&self) -> bool {
        let bucketed: usize = self.by_category.values().map(Vec::len).sum();
        if bucketed != self.by_id.len() {
            return false;
        }
        self.by_id.values().all(|todo| {
            self.by_category
                .get(&todo.category)
                .is_some_and(|ids| ids.iter().filter(|&&id| id == todo.id).count() == 1)
        })
    }

    /// Replaces both indexes with `todos`, visiting the sequence once.
    ///
    /// A repeated identifier overwrites the earlier record and the earlier bucket
    /// entry is dropped, so the result is always consistent. A category only
    /// reached through such an overwritten record is not created. Categories
    /// already known keep their bucket, which may be left empty.
    pub(crate) fn replace_all(&mut self, todos: Vec<Todo>) -> ReplaceReport {
        let mut report = ReplaceReport::default();
        let mut by_id: HashMap<TodoId, Todo> = HashMap::with_capacity(todos.len());
        let mut by_category: BTreeMap<String, Vec<TodoId>> = BTreeMap::new();

        for todo in todos {
            if let Some(previous) = by_id.remove(&todo.id) {
                warn!(id = todo.id, category = %previous.category, "duplicate todo id in list response, keeping the later record");
                if let Some(ids) = by_category.get_mut(&previous.category) {
                    ids.retain(|&id| id != todo.id);
                }
                report.duplicates.push(todo.id);
            }
            if !by_category.contains_key(&todo.category) {
                report.categories.push(todo.category.clone());
            }
            by_category.entry(todo.category.clone()).or_default().push(todo.id);
            by_id.insert(todo.id, todo);
        }

        // A duplicate may have been the only member of its first category.
        by_category.retain(|_, ids| !ids.is_empty());
        report.categories.retain(|category| by_category.contains_key(category));

        // Categories known before the reload stay listed, even when now empty.
        for category in self.by_category.keys() {
            by_category.entry(category.clone()).or_default();
        }

        self.by_id = by_id;
        self.by_category = by_category;
        report
    }

    /// Appends a todo to both indexes. Returns `true` when its category is new.
    pub(crate) fn insert(&mut self, todo: Todo) -> bool {
        if let Some(previous) = self.by_id.remove(&todo.id) {
            self.detach(previous.id, &previous.category);
        }
        let new_category = !self.by_category.contains_key(&todo.category);
        self.by_category.entry(todo.category.clone()).or_default().push(todo.id);
        self.by_id.insert(todo.id, todo);
        new_category
    }

    /// Replaces a stored todo with a fresh server copy.
    ///
    /// Keeps the bucket position when the category is unchanged and moves the
    /// todo to the end of its new bucket otherwise. Returns `None` if the
    /// identifier is unknown, else whether a new category was created.
    pub(crate) fn replace(&mut self, todo: Todo) -> Option<bool> {
        let previous = self.by_id.get(&todo.id)?;
        if previous.category == todo.category {
            self.by_id.insert(todo.id, todo);
            return Some(false);
        }
        let old_category = previous.category.clone();
        self.detach(todo.id, &old_category);
        self.by_id.remove(&todo.id);
        Some(self.insert(todo))
    }

    /// Updates only the completion timestamp. Returns `false` for an unknown id.
    pub(crate) fn set_completion(&mut self, id: TodoId, completed_at: Option<DateTime<Utc>>) -> bool {
        match self.by_id.get_mut(&id) {
            Some(todo) => {
                todo.completed_at = completed_at;
                true
            }
            None => false,
        }
    }

    /// Removes a todo from both indexes. Its bucket stays, possibly empty.
    pub(crate) fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let todo = self.by_id.remove(&id)?;
        self.detach(id, &todo.category);
        Some(todo)
    }

    fn detach(&mut self, id: TodoId, category: &str) {
        if let Some(ids) = self.by_category.get_mut(category) {
            ids.retain(|&other| other != id);
        }
    }
}
