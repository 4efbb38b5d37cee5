use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use flagstore::config::Config;
use flagstore::{MemoryFlagStore, Server, SharedStore, logging};
use tracing::debug;

/// In-memory feature flag service
#[derive(Debug, Parser)]
#[command(name = "flagstore", version)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    logging::init(&config.log)?;
    debug!("Loaded configuration: {:?}", config);

    let store: SharedStore = Arc::new(MemoryFlagStore::new());
    let server = Server::bind(&config.server_addr, store)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;

    // Blocks until the process is asked to stop
    server.run().await?;

    Ok(())
}
