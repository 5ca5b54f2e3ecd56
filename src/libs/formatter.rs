//! Text formatting for todo fields shown in tables and prompts.
//!
//! Timestamps arrive from the service in UTC and are shown in the local time
//! zone using the configured `chrono` format string. An absent timestamp
//! renders as empty text, so open todos leave the "done at" column blank.
//!
//! ## Examples
//!
//! ```rust
//! use rokim_todo::libs::formatter::format_datetime;
//!
//! assert_eq!(format_datetime(None, "%Y-%m-%d"), "");
//! ```

use super::todo::Todo;
use chrono::{DateTime, Local, Utc};

/// Default `chrono` format for timestamps.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Maximum description width in table cells before it gets cut.
const DESCRIPTION_WIDTH: usize = 48;

/// Formats a UTC timestamp in local time. `None` becomes an empty string.
pub fn format_datetime(value: Option<&DateTime<Utc>>, format: &str) -> String {
    match value {
        Some(value) => value.with_timezone(&Local).format(format).to_string(),
        None => String::new(),
    }
}

/// One-line label used in selection prompts, e.g. `#12 Buy milk [Home]`.
pub fn todo_label(todo: &Todo) -> String {
    let mark = if todo.is_done() { "✓ " } else { "" };
    format!("#{} {}{} [{}]", todo.id, mark, todo.title, todo.category)
}

/// Shortens a description for a table cell, keeping whole characters.
pub fn truncate_description(description: &str) -> String {
    let first_line = description.lines().next().unwrap_or_default();
    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_WIDTH).collect();
    if chars.next().is_some() || description.lines().nth(1).is_some() {
        format!("{}…", head)
    } else {
        head
    }
}
