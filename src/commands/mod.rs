pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod prompt;
pub mod status;

use crate::api::{ServiceError, TodoApi};
use crate::libs::config::{Config, DisplayConfig};
use crate::libs::messages::{macros::is_debug_mode, Message};
use crate::libs::store::{StoreError, TodoStore};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List todos grouped by category")]
    List(list::ListArgs),
    #[command(about = "Create a todo")]
    Add(add::AddArgs),
    #[command(about = "Edit a todo")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a todo as done")]
    Done(status::StatusArgs),
    #[command(about = "Mark a todo as to do")]
    Undo(status::StatusArgs),
    #[command(about = "Delete a todo")]
    Delete(delete::DeleteArgs),
    #[command(about = "Interactive todo board")]
    Board,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Todo service URL, overrides the configured one
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let api_url = cli.api_url.as_deref();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args, api_url).await,
            Commands::Add(args) => add::cmd(args, api_url).await,
            Commands::Edit(args) => edit::cmd(args, api_url).await,
            Commands::Done(args) => status::done(args, api_url).await,
            Commands::Undo(args) => status::undo(args, api_url).await,
            Commands::Delete(args) => delete::cmd(args, api_url).await,
            Commands::Board => board::cmd(api_url).await,
        }
    }
}

/// A store connected to the configured service, plus display settings.
pub struct Context {
    pub store: TodoStore<TodoApi>,
    pub display: DisplayConfig,
}

impl Context {
    /// Builds the store without contacting the service.
    pub fn connect(api_url: Option<&str>) -> Result<Self> {
        let config = Config::read()?;
        let api = TodoApi::new(&config.api_config(api_url)?)?;
        debug!(url = %api.base_url(), "using todo service");
        Ok(Self {
            store: TodoStore::new(api),
            display: config.display_or_default(),
        })
    }

    /// Builds the store and loads every todo; a failed load is an error.
    pub async fn open(api_url: Option<&str>) -> Result<Self> {
        let mut context = Self::connect(api_url)?;
        context.store.load_all().await.map_err(|err| failure(&err))?;
        Ok(context)
    }
}

/// The user-facing message for a store error.
pub fn describe(err: &StoreError) -> Message {
    match err {
        StoreError::Service(ServiceError::Redirect { location }) => Message::SignInRequired(location.clone()),
        StoreError::Service(err) => Message::RequestFailed(err.to_string()),
        StoreError::UnknownCategory(category) => Message::CategoryNotFound(category.clone()),
        StoreError::InvalidInput(reason) => Message::InvalidTodo(reason.clone()),
    }
}

/// Converts a store error into a command failure.
pub fn failure(err: &StoreError) -> anyhow::Error {
    crate::msg_error_anyhow!(describe(err))
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only errors are logged, or everything
/// from this crate down to `debug` in debug mode.
pub fn init_tracing() -> Result<()> {
    let default_level = match is_debug_mode() {
        true => "rokim_todo=debug,info",
        false => "error",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
