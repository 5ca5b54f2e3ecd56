use super::{failure, Context};
use crate::libs::{messages::Message, view::View};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show this category
    #[arg(short, long)]
    category: Option<String>,

    /// Include completed todos
    #[arg(short, long)]
    all: bool,
}

pub async fn cmd(args: ListArgs, api_url: Option<&str>) -> Result<()> {
    let mut context = Context::open(api_url).await?;

    let categories = match &args.category {
        Some(category) if !context.store.index().has_category(category) => {
            msg_bail_anyhow!(Message::CategoryNotFound(category.clone()))
        }
        Some(category) => vec![category.clone()],
        None => context.store.categories(),
    };

    if args.all {
        for category in &categories {
            if !context.store.show_completed(category).map_err(|err| failure(&err))? {
                context.store.toggle_show_completed(category).map_err(|err| failure(&err))?;
            }
        }
    }

    let views: Vec<_> = context
        .store
        .board()
        .into_iter()
        .filter(|view| categories.iter().any(|category| category == view.category))
        .collect();
    View::board(&views, context.store.details(), &context.display);
    Ok(())
}
