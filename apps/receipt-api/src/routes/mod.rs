//! API route handlers

pub mod health;
pub mod receipts;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        // Service info
        .route("/", get(health::info))
        .route("/health", get(health::health_check))
        // Receipt endpoints
        .route("/receipts", get(receipts::list_receipts))
        .route("/receipts/process", post(receipts::process_receipt))
        .route("/receipts/{id}", get(receipts::get_points))
        .route("/receipts/{id}/points", get(receipts::get_points))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
