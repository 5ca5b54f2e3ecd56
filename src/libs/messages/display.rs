//! Display implementation for rokim-todo messages.
//!
//! All user-facing text is defined here, in one match over [`Message`]. Messages
//! with parameters interpolate them directly; the macros in
//! [`super::macros`] add the status prefixes.
//!
//! ```rust
//! use rokim_todo::libs::messages::Message;
//!
//! assert_eq!(Message::TodoDeleted(3).to_string(), "Todo #3 deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoCreated(id, title) => format!("Todo #{} '{}' created", id, title),
            Message::TodoUpdated(id) => format!("Todo #{} updated", id),
            Message::TodoDeleted(id) => format!("Todo #{} deleted", id),
            Message::TodoMarkedDone(id) => format!("Todo #{} marked as done", id),
            Message::TodoMarkedUndone(id) => format!("Todo #{} marked as to do", id),
            Message::TodoNotFound(id) => format!("Todo with ID {} not found.", id),
            Message::TodoNotLoaded(id) => {
                format!("The server accepted the change, but todo #{} is not in the local list. Reload to see it.", id)
            }
            Message::TodosLoaded(count) => format!("Loaded {} todo(s)", count),
            Message::NoTodos => "No todos yet. Create one with `rokim-todo add`.".to_string(),
            Message::ConfirmDeleteTodo(label) => format!("Delete {}?", label),
            Message::InvalidTodo(reason) => format!("Invalid todo: {}", reason),

            // === CATEGORY MESSAGES ===
            Message::CategoryHeader { category, shown, total } => format!("▾ {} ({}/{})", category, shown, total),
            Message::CategoryCollapsed { category, total } => format!("▸ {} ({})", category, total),
            Message::CategoryEmpty => "  Nothing to show".to_string(),
            Message::CategoryNotFound(category) => format!("Category '{}' not found", category),
            Message::HiddenCompleted(count) => format!("  {} completed todo(s) hidden", count),
            Message::CategoryExpandToggled(category, expanded) => match expanded {
                true => format!("Category '{}' expanded", category),
                false => format!("Category '{}' collapsed", category),
            },
            Message::CategoryShowCompletedToggled(category, show) => match show {
                true => format!("Category '{}' shows completed todos", category),
                false => format!("Category '{}' hides completed todos", category),
            },
            Message::DetailsToggled(id, expanded) => match expanded {
                true => format!("Showing details of todo #{}", id),
                false => format!("Hiding details of todo #{}", id),
            },

            // === BOARD MESSAGES ===
            Message::BoardHeader => "Todo board".to_string(),
            Message::BoardActionToggleExpand => "Expand / collapse a category".to_string(),
            Message::BoardActionToggleCompleted => "Show / hide completed todos of a category".to_string(),
            Message::BoardActionToggleDetails => "Show / hide details of a todo".to_string(),
            Message::BoardActionMarkDone => "Mark a todo as done".to_string(),
            Message::BoardActionMarkUndone => "Mark a todo as to do".to_string(),
            Message::BoardActionCreate => "Create a todo".to_string(),
            Message::BoardActionEdit => "Edit a todo".to_string(),
            Message::BoardActionDelete => "Delete a todo".to_string(),
            Message::BoardActionReload => "Reload from server".to_string(),
            Message::BoardActionQuit => "Quit".to_string(),
            Message::NewCategoryOption => "+ New category".to_string(),

            // === SERVICE MESSAGES ===
            Message::LoadFailed(error) => format!("Error fetching todos: {}", error),
            Message::RequestFailed(error) => format!("Todo service request failed: {}", error),
            Message::SignInRequired(location) => format!("Sign-in required. Open {} in your browser and try again.", location),
            Message::ApiNotConfigured => {
                "Todo service URL is not configured. Run `rokim-todo init` or pass --api-url.".to_string()
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Todo service settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === PROMPTS ===
            Message::PromptTodoTitle => "Title".to_string(),
            Message::PromptTodoDescription => "Description".to_string(),
            Message::PromptTodoCategory => "Category".to_string(),
            Message::PromptNewCategory => "New category name".to_string(),
            Message::PromptSelectCategory => "Select a category".to_string(),
            Message::PromptSelectTodo => "Select a todo".to_string(),
            Message::PromptSelectAction => "What next?".to_string(),
            Message::PromptApiUrl => "Enter the todo service URL".to_string(),
            Message::PromptApiTimeout => "Enter request timeout (seconds, 0 for none)".to_string(),
            Message::PromptDateFormat => "Enter date format (chrono syntax)".to_string(),
            Message::PromptShowDescriptions => "Show descriptions in lists?".to_string(),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
