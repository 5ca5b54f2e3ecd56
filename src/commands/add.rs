use super::{failure, prompt, Context};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Todo title, prompted for when omitted
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// Category, chosen from the known ones when omitted
    #[arg(short, long)]
    category: Option<String>,
}

pub async fn cmd(args: AddArgs, api_url: Option<&str>) -> Result<()> {
    let mut context = Context::open(api_url).await?;

    let prompted = args.title.is_none();
    let title = match args.title {
        Some(title) => title,
        None => prompt::title(None)?,
    };
    // The description is only asked for when the title was asked for too.
    let description = match args.description {
        Some(description) => description,
        None if prompted => prompt::description(None)?,
        None => String::new(),
    };
    let category = match args.category {
        Some(category) => category,
        None => prompt::category(&context.store.categories(), None)?,
    };

    let todo = context
        .store
        .create(&title, &description, &category)
        .await
        .map_err(|err| failure(&err))?;

    msg_success!(Message::TodoCreated(todo.id, todo.title));
    Ok(())
}
