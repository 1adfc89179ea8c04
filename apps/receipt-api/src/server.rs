//! API Server setup

use std::net::SocketAddr;
use std::sync::Arc;

use receipt_store::ReceiptStore;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the API server until Ctrl+C or SIGTERM.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Build the ReceiptStore (empty, lives until process exit)           │
/// │  2. Wrap it in AppState / ReceiptService                                │
/// │  3. Build the router (body limit, request tracing)                      │
/// │  4. Bind HOST:PORT and serve with graceful shutdown                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run_server(config: ApiConfig) -> std::io::Result<()> {
    let store = Arc::new(ReceiptStore::new());
    let router = create_router(AppState::new(Arc::clone(&store)), &config);

    let listener = TcpListener::bind(config.bind_address()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "Receipt API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(receipts = store.len(), "Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
