//! Tip pool server entry point.
//!
//! Loads the YAML configuration, opens the JSON stores and serves the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tip_pool_engine::api::{AppState, create_router};
use tip_pool_engine::config::ConfigLoader;
use tip_pool_engine::service::TipService;
use tip_pool_engine::store::JsonFileStore;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "tip-pool")]
#[command(about = "Pooled tip distribution service")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tip_pool_engine={0},tip_pool={0}",
            args.log_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let loader = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => {
            warn!("No configuration file given, using built-in defaults");
            ConfigLoader::default()
        }
    };

    let store = JsonFileStore::from_config(loader.storage());
    info!(
        multipliers = %store.multipliers_path().display(),
        history = %store.history_path().display(),
        "Opened tip stores"
    );

    let service = TipService::new(store, loader.roster().staff.clone());
    let router = create_router(AppState::new(service));

    let bind_address = args.bind.unwrap_or(loader.server().bind_address);
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!(
        address = %bind_address,
        staff = loader.roster().staff.len(),
        "Tip pool server listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
