//! # Receipt API
//!
//! Binary entry point: logging, configuration, server.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use receipt_api::{run_server, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Receipt API server...");

    let config = ApiConfig::load().context("failed to load configuration")?;
    info!(
        host = %config.host,
        port = config.port,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    run_server(config)
        .await
        .context("receipt API server failed")?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (including per-rule points)
/// - `RUST_LOG=receipt_store=trace` - Trace for the store crate only
/// - Default: INFO, DEBUG for receipt crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,receipt=debug,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
