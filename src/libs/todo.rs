//! Todo records as exchanged with the todo service.
//!
//! A [`Todo`] is owned by the server: its identifier and timestamps are assigned
//! remotely and the client never invents them. Completion is signalled solely by
//! the presence of [`Todo::completed_at`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub category: String,
    /// Completion timestamp. `None` means the todo is still open.
    #[serde(rename = "done_at", default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn is_done(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Request body for creating or updating a todo.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl NewTodo {
    pub fn new(title: &str, description: &str, category: &str) -> Self {
        NewTodo {
            title: title.trim().to_string(),
            description: description.to_string(),
            category: category.trim().to_string(),
        }
    }
}

/// Result of a completion change.
///
/// The service may answer with the full todo or with a partial record; only the
/// completion timestamp is read, everything else is ignored.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Completion {
    #[serde(rename = "done_at", default)]
    pub completed_at: Option<DateTime<Utc>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
