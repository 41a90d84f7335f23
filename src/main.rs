use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tripstore::config::Config;
use tripstore::hydration::{self, ApiClient};
use tripstore::store::TripStore;

/// Hydrate the trip store from the remote endpoints once and print the
/// resulting state snapshot as JSON.
#[derive(Debug, Parser)]
#[command(name = "tripstore", version, about)]
struct Cli {
    /// Path to a TOML config file (defaults to the per-user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured endpoint base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Log filter when RUST_LOG is unset, e.g. "info" or "tripstore=debug".
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let api = ApiClient::new(&config.api)?;
    let store = TripStore::new();

    let handle = hydration::spawn(store.clone(), api);
    handle.join().await;

    let snapshot = store.state();
    for failure in &snapshot.hydration_failures {
        tracing::warn!(source = %failure.source, message = %failure.message, "hydration incomplete");
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
