use super::board::CategoryView;
use super::config::DisplayConfig;
use super::filter::DetailToggles;
use super::formatter::{format_datetime, truncate_description};
use super::messages::Message;
use super::todo::Todo;
use crate::{msg_info, msg_print};
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the whole board, one block per category.
    pub fn board(views: &[CategoryView<'_>], details: &DetailToggles, display: &DisplayConfig) {
        if views.is_empty() {
            msg_info!(Message::NoTodos);
            return;
        }
        for view in views {
            Self::category(view, details, display);
        }
    }

    /// Prints one category: a header line and, when expanded, its table.
    pub fn category(view: &CategoryView<'_>, details: &DetailToggles, display: &DisplayConfig) {
        if !view.expanded {
            msg_print!(Message::CategoryCollapsed {
                category: view.category.to_string(),
                total: view.total(),
            });
            return;
        }

        msg_print!(Message::CategoryHeader {
            category: view.category.to_string(),
            shown: view.todos.len(),
            total: view.total(),
        });

        if view.todos.is_empty() {
            msg_print!(Message::CategoryEmpty);
        } else {
            Self::todos(&view.todos, details, display).printstd();
        }

        if view.hidden > 0 {
            msg_print!(Message::HiddenCompleted(view.hidden));
        }
    }

    /// Builds the table for a list of todos.
    pub fn todos(todos: &[&Todo], details: &DetailToggles, display: &DisplayConfig) -> Table {
        let mut table = Table::new();

        let with_description = display.show_descriptions || todos.iter().any(|todo| details.is_expanded(todo.id));

        let mut header = vec!["ID", "TITLE"];
        if with_description {
            header.push("DESCRIPTION");
        }
        header.push("DONE AT");
        table.add_row(Row::new(header.into_iter().map(Cell::new).collect()));

        for todo in todos {
            let expanded = details.is_expanded(todo.id);
            let mut cells = vec![Cell::new(&todo.id.to_string()), Cell::new(&todo.title)];
            if with_description {
                let description = match expanded {
                    true => Self::details(todo, display),
                    false => truncate_description(&todo.description),
                };
                cells.push(Cell::new(&description));
            }
            cells.push(Cell::new(&format_datetime(todo.completed_at.as_ref(), &display.date_format)));
            table.add_row(Row::new(cells));
        }

        table
    }

    fn details(todo: &Todo, display: &DisplayConfig) -> String {
        match todo.created_at.as_ref() {
            Some(created_at) => format!(
                "{}\n(created {})",
                todo.description,
                format_datetime(Some(created_at), &display.date_format)
            ),
            None => todo.description.clone(),
        }
    }
}
