//! # Receipt API
//!
//! JSON-over-HTTP front of the receipt processor.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                      Success            Failure           │
//! │  ──────  ────────────────────────  ─────────────────  ────────────────  │
//! │  GET     /                         service info       -                 │
//! │  GET     /health                   "OK"               -                 │
//! │  POST    /receipts/process         200 {"id"}         400               │
//! │  GET     /receipts/{id}            200 {"points"}     404               │
//! │  GET     /receipts/{id}/points     200 {"points"}     404               │
//! │  GET     /receipts                 200 [{id,points}]  -                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8000)
//! - `MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RUST_LOG` - Log filter (default: `info,receipt=debug,tower_http=info`)

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::run_server;
pub use state::AppState;
