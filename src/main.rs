use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nebula::app::AppContext;
use nebula::cli::{commands, Cli, Commands};
use nebula::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    init_tracing(matches!(command, Commands::Tui), cli.log)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.feed_url {
        config.feed.url = url;
    }

    let ctx = AppContext::new(config)?;

    match command {
        Commands::Tui => {
            nebula::tui::run(Arc::new(ctx)).await?;
        }
        Commands::List { range } => {
            commands::list_entries(&ctx, &range).await?;
        }
        Commands::Export { range, out } => {
            commands::export_html(&ctx, &range, &out).await?;
        }
    }

    Ok(())
}

/// The TUI owns the terminal, so its logs go to a file.
fn init_tracing(tui: bool, log: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match log {
        Some(path) => Some(path),
        None if tui => dirs::cache_dir().map(|dir| dir.join("nebula").join("nebula.log")),
        None => None,
    };

    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = File::options().create(true).append(true).open(&path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(EnvFilter::from_default_env())
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    }
    Ok(())
}
