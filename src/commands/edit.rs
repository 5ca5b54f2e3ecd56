use super::{failure, prompt, Context};
use crate::libs::{messages::Message, todo::TodoId};
use crate::{msg_error_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    id: TodoId,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long)]
    category: Option<String>,
}

pub async fn cmd(args: EditArgs, api_url: Option<&str>) -> Result<()> {
    let mut context = Context::open(api_url).await?;
    let current = context
        .store
        .get(args.id)
        .cloned()
        .ok_or_else(|| msg_error_anyhow!(Message::TodoNotFound(args.id)))?;

    // Without any flag every field is prompted for, pre-filled with its current value.
    let interactive = args.title.is_none() && args.description.is_none() && args.category.is_none();
    let (title, description, category) = match interactive {
        true => (
            prompt::title(Some(&current.title))?,
            prompt::description(Some(&current.description))?,
            prompt::category(&context.store.categories(), Some(&current.category))?,
        ),
        false => (
            args.title.unwrap_or(current.title),
            args.description.unwrap_or(current.description),
            args.category.unwrap_or(current.category),
        ),
    };

    match context
        .store
        .update(args.id, &title, &description, &category)
        .await
        .map_err(|err| failure(&err))?
    {
        Some(todo) => msg_success!(Message::TodoUpdated(todo.id)),
        None => msg_warning!(Message::TodoNotLoaded(args.id)),
    }
    Ok(())
}
