mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    hookgate_runtime::init_logging();

    // Parse CLI args
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => commands::init::run_init(&path),
        Some(Commands::Serve) | None => {
            let mut config = config::load_config(cli.config.as_deref())?;
            config.apply_overrides(&cli.serve);
            commands::serve::execute(&config).await
        }
    }
}
