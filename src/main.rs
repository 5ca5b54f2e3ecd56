use rokim_todo::commands::{init_tracing, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    Cli::menu().await
}
