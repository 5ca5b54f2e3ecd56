//! Interactive prompts shared by the commands.

use crate::libs::formatter::todo_label;
use crate::libs::messages::Message;
use crate::libs::todo::{Todo, TodoId};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn title(default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptTodoTitle.to_string());
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn description(default: Option<&str>) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTodoDescription.to_string())
        .default(default.unwrap_or_default().to_string())
        .allow_empty(true)
        .interact_text()?)
}

/// Lets the user pick a known category or type a new one.
pub fn category(categories: &[String], default: Option<&str>) -> Result<String> {
    if categories.is_empty() {
        return new_category();
    }

    let mut items: Vec<String> = categories.to_vec();
    items.push(Message::NewCategoryOption.to_string());
    let preselected = default
        .and_then(|default| categories.iter().position(|category| category == default))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTodoCategory.to_string())
        .items(&items)
        .default(preselected)
        .interact()?;

    match categories.get(selection) {
        Some(category) => Ok(category.clone()),
        None => new_category(),
    }
}

fn new_category() -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewCategory.to_string())
        .interact_text()?)
}

/// Picks one of the known categories. `None` when cancelled or there are none.
pub fn select_category(categories: &[String]) -> Result<Option<String>> {
    if categories.is_empty() {
        return Ok(None);
    }
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectCategory.to_string())
        .items(categories)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|index| categories[index].clone()))
}

/// Picks one todo from `todos`. `None` when cancelled or the list is empty.
pub fn select_todo(todos: &[&Todo]) -> Result<Option<TodoId>> {
    if todos.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = todos.iter().map(|todo| todo_label(todo)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTodo.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|index| todos[index].id))
}
