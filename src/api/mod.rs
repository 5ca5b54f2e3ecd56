//! Client side of the todo service.
//!
//! The store never talks HTTP directly. It depends on the [`TaskService`] trait,
//! which [`TodoApi`] implements over `reqwest` and tests implement in memory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rokim_todo::api::{TaskService, TodoApi, TodoApiConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = TodoApi::new(&TodoApiConfig::new("http://localhost:8080"))?;
//! let todos = api.list().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::todo::{Completion, NewTodo, Todo, TodoId};
use reqwest::StatusCode;
use thiserror::Error;

pub mod redirect;
pub mod todo;

pub use todo::{TodoApi, TodoApiConfig};

/// Failure of a remote call. Always non-fatal for the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("todo service answered {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// The service redirected the client, usually to its sign-in page.
    #[error("todo service redirected to {location}")]
    Redirect { location: String },

    #[error("todo service redirected {url} without a Location header")]
    RedirectWithoutLocation { url: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid todo service URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// The remote operations the todo store depends on.
///
/// Implementations report every failure as a [`ServiceError`] and never retry.
#[allow(async_fn_in_trait)]
pub trait TaskService {
    /// Fetches every todo.
    async fn list(&self) -> Result<Vec<Todo>, ServiceError>;

    /// Creates a todo and returns it with its server-assigned identifier.
    async fn create(&self, todo: &NewTodo) -> Result<Todo, ServiceError>;

    /// Replaces title, description and category of an existing todo.
    async fn update(&self, id: TodoId, todo: &NewTodo) -> Result<Todo, ServiceError>;

    /// Marks a todo as done and returns the new completion timestamp.
    async fn mark_done(&self, id: TodoId) -> Result<Completion, ServiceError>;

    /// Clears the completion timestamp of a todo.
    async fn mark_undone(&self, id: TodoId) -> Result<Completion, ServiceError>;

    async fn delete(&self, id: TodoId) -> Result<(), ServiceError>;
}
