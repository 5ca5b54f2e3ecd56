use super::{failure, Context};
use crate::libs::{formatter::todo_label, messages::Message, todo::TodoId};
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Todo ID
    id: TodoId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs, api_url: Option<&str>) -> Result<()> {
    let mut context = Context::open(api_url).await?;
    let label = context
        .store
        .get(args.id)
        .map(todo_label)
        .ok_or_else(|| msg_error_anyhow!(Message::TodoNotFound(args.id)))?;

    if !args.yes && !confirm_delete(&label)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    context.store.delete(args.id).await.map_err(|err| failure(&err))?;
    msg_success!(Message::TodoDeleted(args.id));
    Ok(())
}

pub fn confirm_delete(label: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTodo(label.to_string()).to_string())
        .default(false)
        .interact()?)
}
