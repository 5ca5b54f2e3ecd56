//! Completion commands: `done` and `undo`.

use super::{failure, Context};
use crate::libs::{messages::Message, todo::TodoId};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Todo ID
    id: TodoId,
}

pub async fn done(args: StatusArgs, api_url: Option<&str>) -> Result<()> {
    let mut context = Context::open(api_url).await?;
    match context.store.mark_done(args.id).await.map_err(|err| failure(&err))? {
        Some(_) => msg_success!(Message::TodoMarkedDone(args.id)),
        None => msg_warning!(Message::TodoNotLoaded(args.id)),
    }
    Ok(())
}

pub async fn undo(args: StatusArgs, api_url: Option<&str>) -> Result<()> {
    let mut context = Context::open(api_url).await?;
    match context.store.mark_undone(args.id).await.map_err(|err| failure(&err))? {
        Some(_) => msg_success!(Message::TodoMarkedUndone(args.id)),
        None => msg_warning!(Message::TodoNotLoaded(args.id)),
    }
    Ok(())
}
