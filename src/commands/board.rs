//! Interactive board session.
//!
//! One store lives for the whole session, so category filters and detail
//! toggles persist between actions. A failed request is reported and the
//! session goes on; the board simply shows the state the store kept.

use super::delete::confirm_delete;
use super::{describe, prompt, Context};
use crate::api::TodoApi;
use crate::libs::formatter::todo_label;
use crate::libs::messages::Message;
use crate::libs::store::{StoreError, TodoStore};
use crate::libs::todo::{Todo, TodoId};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    ToggleExpand,
    ToggleCompleted,
    ToggleDetails,
    MarkDone,
    MarkUndone,
    Create,
    Edit,
    Delete,
    Reload,
    Quit,
}

impl Action {
    const ALL: [Action; 10] = [
        Action::ToggleExpand,
        Action::ToggleCompleted,
        Action::ToggleDetails,
        Action::MarkDone,
        Action::MarkUndone,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Reload,
        Action::Quit,
    ];

    fn label(self) -> Message {
        match self {
            Action::ToggleExpand => Message::BoardActionToggleExpand,
            Action::ToggleCompleted => Message::BoardActionToggleCompleted,
            Action::ToggleDetails => Message::BoardActionToggleDetails,
            Action::MarkDone => Message::BoardActionMarkDone,
            Action::MarkUndone => Message::BoardActionMarkUndone,
            Action::Create => Message::BoardActionCreate,
            Action::Edit => Message::BoardActionEdit,
            Action::Delete => Message::BoardActionDelete,
            Action::Reload => Message::BoardActionReload,
            Action::Quit => Message::BoardActionQuit,
        }
    }
}

pub async fn cmd(api_url: Option<&str>) -> Result<()> {
    let mut context = Context::connect(api_url)?;
    reload(&mut context.store).await;

    let labels: Vec<String> = Action::ALL.iter().map(|action| action.label().to_string()).collect();
    loop {
        msg_print!(Message::BoardHeader, true);
        View::board(&context.store.board(), context.store.details(), &context.display);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let action = match selection {
            Some(index) => Action::ALL[index],
            None => Action::Quit,
        };
        if action == Action::Quit {
            break;
        }

        if let Err(err) = run(action, &mut context.store).await? {
            msg_error!(describe(&err));
        }
    }
    Ok(())
}

/// Performs one action. The outer error is a terminal failure that ends the
/// session; the inner one is a store error to report.
async fn run(action: Action, store: &mut TodoStore<TodoApi>) -> Result<Result<(), StoreError>> {
    let outcome = match action {
        Action::ToggleExpand => match prompt::select_category(&store.categories())? {
            Some(category) => store
                .toggle_expand(&category)
                .map(|expanded| msg_info!(Message::CategoryExpandToggled(category, expanded))),
            None => Ok(()),
        },
        Action::ToggleCompleted => match prompt::select_category(&store.categories())? {
            Some(category) => store
                .toggle_show_completed(&category)
                .map(|show| msg_info!(Message::CategoryShowCompletedToggled(category, show))),
            None => Ok(()),
        },
        Action::ToggleDetails => {
            if let Some(id) = pick(store, |_| true)? {
                let expanded = store.toggle_details(id);
                msg_info!(Message::DetailsToggled(id, expanded));
            }
            Ok(())
        }
        Action::MarkDone => match pick(store, |todo| !todo.is_done())? {
            Some(id) => store.mark_done(id).await.map(|todo| match todo {
                Some(_) => msg_success!(Message::TodoMarkedDone(id)),
                None => msg_warning!(Message::TodoNotLoaded(id)),
            }),
            None => Ok(()),
        },
        Action::MarkUndone => match pick(store, Todo::is_done)? {
            Some(id) => store.mark_undone(id).await.map(|todo| match todo {
                Some(_) => msg_success!(Message::TodoMarkedUndone(id)),
                None => msg_warning!(Message::TodoNotLoaded(id)),
            }),
            None => Ok(()),
        },
        Action::Create => {
            let title = prompt::title(None)?;
            let description = prompt::description(None)?;
            let category = prompt::category(&store.categories(), None)?;
            store
                .create(&title, &description, &category)
                .await
                .map(|todo| msg_success!(Message::TodoCreated(todo.id, todo.title)))
        }
        Action::Edit => match pick(store, |_| true)?.and_then(|id| store.get(id).cloned()) {
            Some(current) => {
                let title = prompt::title(Some(&current.title))?;
                let description = prompt::description(Some(&current.description))?;
                let category = prompt::category(&store.categories(), Some(&current.category))?;
                store
                    .update(current.id, &title, &description, &category)
                    .await
                    .map(|todo| match todo {
                        Some(todo) => msg_success!(Message::TodoUpdated(todo.id)),
                        None => msg_warning!(Message::TodoNotLoaded(current.id)),
                    })
            }
            None => Ok(()),
        },
        Action::Delete => {
            let picked = pick(store, |_| true)?.and_then(|id| store.get(id).map(|todo| (id, todo_label(todo))));
            match picked {
                Some((id, label)) => match confirm_delete(&label)? {
                    true => store.delete(id).await.map(|_| msg_success!(Message::TodoDeleted(id))),
                    false => {
                        msg_info!(Message::OperationCancelled);
                        Ok(())
                    }
                },
                None => Ok(()),
            }
        }
        Action::Reload => {
            reload(store).await;
            Ok(())
        }
        Action::Quit => Ok(()),
    };
    Ok(outcome)
}

/// Loads every todo, reporting a failure instead of returning it.
async fn reload(store: &mut TodoStore<TodoApi>) {
    match store.load_all().await {
        Ok(count) => msg_info!(Message::TodosLoaded(count)),
        Err(err) => msg_error!(Message::LoadFailed(describe(&err).to_string())),
    }
}

/// Lets the user pick among the loaded todos matching `matches`, in board order.
fn pick(store: &TodoStore<TodoApi>, matches: impl Fn(&Todo) -> bool) -> Result<Option<TodoId>> {
    let index = store.index();
    let candidates: Vec<&Todo> = index
        .categories()
        .flat_map(|category| index.bucket(category))
        .filter(|todo| matches(*todo))
        .collect();
    prompt::select_todo(&candidates)
}
