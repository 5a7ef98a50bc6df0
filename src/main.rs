//! Binary entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use namecast::config::Config;

use cli::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Some(Command::Lookup { name }) => cli::cmd_lookup(&config, &name).await,
        Some(Command::Save { name, gender }) => cli::cmd_save(&config, &name, gender).await,
        Some(Command::Clear { name }) => cli::cmd_clear(&config, &name).await,
        Some(Command::Saved { name }) => cli::cmd_saved(&config, name.as_deref()).await,
        None => cli::run_repl(&config).await,
    }
}
