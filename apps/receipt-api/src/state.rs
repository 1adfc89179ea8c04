//! Application state for the API server.

use std::sync::Arc;

use receipt_store::{ReceiptService, ReceiptStore};

/// Shared application state.
///
/// Built once at startup and cloned into every handler; all clones share
/// the same [`ReceiptStore`].
#[derive(Debug, Clone)]
pub struct AppState {
    pub receipts: ReceiptService,
    /// API version reported by `GET /`.
    pub version: String,
}

impl AppState {
    /// Creates state over an existing store.
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        AppState {
            receipts: ReceiptService::new(store),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Arc::new(ReceiptStore::new()))
    }
}
