//! Inventory tool entry point.
//!
//! Reads commands from standard input and prints replies to standard
//! output. Logs go to standard error.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stockroom::config::AppConfig;
use stockroom::session::Session;
use stockroom::storage::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Track products, stock, prices, and suppliers from the command line")]
struct Cli {
    /// Snapshot file (overrides STOCKROOM_DATA_FILE)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Tracing filter directive (overrides STOCKROOM_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()
        .context("failed to load configuration")?
        .with_overrides(cli.data_file, cli.log);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter {:?}", config.log_filter))?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(data_file = %config.data_file.display(), "starting inventory session");

    let store = JsonFileStore::new(&config.data_file);
    let mut session = Session::open(store)
        .with_context(|| format!("failed to open {}", config.data_file.display()))?;
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
