//! The todo store: single owner of all loaded todos.
//!
//! Every mutation goes to the [`TaskService`] first and is applied locally only
//! after the service confirmed it, so a failed call never leaves partial state
//! behind and nothing needs to be rolled back. Mutating methods take
//! `&mut self` across the remote call, which serializes all mutations,
//! including two requests for the same todo.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rokim_todo::api::{TodoApi, TodoApiConfig};
//! use rokim_todo::libs::store::TodoStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = TodoApi::new(&TodoApiConfig::new("http://localhost:8080"))?;
//! let mut store = TodoStore::new(api);
//! store.load_all().await?;
//! let created = store.create("Buy milk", "", "Home").await?;
//! store.mark_done(created.id).await?;
//! for todo in store.visible_todos("Home")? {
//!     println!("{}", todo.title);
//! }
//! # Ok(())
//! # }
//! ```

use super::board::{self, CategoryView};
use super::filter::{CategoryFilters, DetailToggles};
use super::index::TodoIndex;
use super::todo::{NewTodo, Todo, TodoId};
use crate::api::{ServiceError, TaskService};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The remote call failed; local state is unchanged.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A filter was read or toggled for a category that was never observed.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// The request was rejected before it was sent.
    #[error("invalid todo: {0}")]
    InvalidInput(String),
}

pub struct TodoStore<S> {
    service: S,
    index: TodoIndex,
    filters: CategoryFilters,
    details: DetailToggles,
}

impl<S: TaskService> TodoStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            index: TodoIndex::new(),
            filters: CategoryFilters::new(),
            details: DetailToggles::default(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Read-only view of both indexes.
    pub fn index(&self) -> &TodoIndex {
        &self.index
    }

    pub fn filters(&self) -> &CategoryFilters {
        &self.filters
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.index.get(id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Known categories in sorted order.
    pub fn categories(&self) -> Vec<String> {
        self.index.categories().map(str::to_string).collect()
    }

    /// Replaces the local todos with the full list from the service.
    ///
    /// Filter entries are created for newly seen categories; existing entries
    /// keep their state. On failure nothing changes. Returns the number of
    /// todos loaded.
    pub async fn load_all(&mut self) -> Result<usize, StoreError> {
        let todos = self.service.list().await.inspect_err(|err| {
            warn!(error = %err, "error fetching todos");
        })?;

        let report = self.index.replace_all(todos);
        for category in &report.categories {
            if self.filters.observe(category) {
                debug!(category = %category, "new category");
            }
        }
        let index = &self.index;
        self.details.retain(|id| index.contains(id));

        debug!(
            todos = self.index.len(),
            categories = report.categories.len(),
            duplicates = report.duplicates.len(),
            "todos loaded"
        );
        Ok(self.index.len())
    }

    /// Creates a todo on the service and adds the returned record locally.
    pub async fn create(&mut self, title: &str, description: &str, category: &str) -> Result<Todo, StoreError> {
        let request = Self::validate(NewTodo::new(title, description, category))?;
        let todo = self.service.create(&request).await.inspect_err(|err| {
            warn!(error = %err, category = %request.category, "error creating todo");
        })?;

        debug!(id = todo.id, category = %todo.category, "todo created");
        self.attach(todo.clone());
        Ok(todo)
    }

    /// Replaces title, description and category of a todo.
    ///
    /// Returns `None` when the service accepted the change but the todo is not
    /// loaded locally; that case is logged and nothing changes.
    pub async fn update(
        &mut self,
        id: TodoId,
        title: &str,
        description: &str,
        category: &str,
    ) -> Result<Option<Todo>, StoreError> {
        let request = Self::validate(NewTodo::new(title, description, category))?;
        let todo = self.service.update(id, &request).await.inspect_err(|err| {
            warn!(id, error = %err, "error updating todo");
        })?;

        if todo.id != id {
            error!(id, returned = todo.id, "todo service returned a different todo for the update");
            return Ok(None);
        }
        let category = todo.category.clone();
        match self.index.replace(todo.clone()) {
            Some(_) => {
                self.filters.observe(&category);
                debug!(id, category = %category, "todo updated");
                Ok(Some(todo))
            }
            None => {
                error!(id, "todo with ID {} not found", id);
                Ok(None)
            }
        }
    }

    /// Marks a todo as done. See [`TodoStore::update`] for the `None` case.
    pub async fn mark_done(&mut self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let completion = self.service.mark_done(id).await.inspect_err(|err| {
            warn!(id, error = %err, "error marking todo as done");
        })?;
        Ok(self.apply_completion(id, completion.completed_at))
    }

    /// Marks a todo as not done. See [`TodoStore::update`] for the `None` case.
    pub async fn mark_undone(&mut self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let completion = self.service.mark_undone(id).await.inspect_err(|err| {
            warn!(id, error = %err, "error marking todo as to do");
        })?;
        Ok(self.apply_completion(id, completion.completed_at))
    }

    /// Deletes a todo and removes it from both indexes.
    ///
    /// Returns the removed record, or `None` if it was not loaded locally.
    pub async fn delete(&mut self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        self.service.delete(id).await.inspect_err(|err| {
            warn!(id, error = %err, "error deleting todo");
        })?;

        self.details.forget(id);
        match self.index.remove(id) {
            Some(todo) => {
                debug!(id, category = %todo.category, "todo deleted");
                Ok(Some(todo))
            }
            None => {
                error!(id, "todo with ID {} not found", id);
                Ok(None)
            }
        }
    }

    pub fn toggle_expand(&mut self, category: &str) -> Result<bool, StoreError> {
        self.filters.toggle_expand(category)
    }

    pub fn toggle_show_completed(&mut self, category: &str) -> Result<bool, StoreError> {
        self.filters.toggle_show_completed(category)
    }

    pub fn is_expanded(&self, category: &str) -> Result<bool, StoreError> {
        self.filters.is_expanded(category)
    }

    pub fn show_completed(&self, category: &str) -> Result<bool, StoreError> {
        self.filters.show_completed(category)
    }

    /// Flips the details flag of a loaded todo and returns the new value.
    /// Unknown ids are logged and stay collapsed.
    pub fn toggle_details(&mut self, id: TodoId) -> bool {
        if !self.index.contains(id) {
            error!(id, "todo with ID {} not found", id);
            return false;
        }
        self.details.toggle(id)
    }

    pub fn details_expanded(&self, id: TodoId) -> bool {
        self.details.is_expanded(id)
    }

    pub fn details(&self) -> &DetailToggles {
        &self.details
    }

    /// Todos of a category after applying its show-completed filter.
    pub fn visible_todos(&self, category: &str) -> Result<Vec<&Todo>, StoreError> {
        board::visible_todos(&self.index, &self.filters, category)
    }

    /// The whole board, one view per known category.
    pub fn board(&self) -> Vec<CategoryView<'_>> {
        board::board(&self.index, &self.filters)
    }

    fn validate(request: NewTodo) -> Result<NewTodo, StoreError> {
        if request.title.is_empty() {
            return Err(StoreError::InvalidInput("title must not be empty".to_string()));
        }
        if request.category.is_empty() {
            return Err(StoreError::InvalidInput("category must not be empty".to_string()));
        }
        Ok(request)
    }

    fn attach(&mut self, todo: Todo) {
        let category = todo.category.clone();
        if self.index.insert(todo) {
            debug!(category = %category, "new category");
        }
        self.filters.observe(&category);
    }

    fn apply_completion(&mut self, id: TodoId, completed_at: Option<DateTime<Utc>>) -> Option<Todo> {
        if !self.index.set_completion(id, completed_at) {
            error!(id, "todo with ID {} not found", id);
            return None;
        }
        debug!(id, done = completed_at.is_some(), "todo completion changed");
        self.index.get(id).cloned()
    }
}
