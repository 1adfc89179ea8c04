//! Service info and health endpoints

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub version: String,
}

/// Describe the service
pub async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: "Receipt Processor",
        description: "A simple receipt processor",
        version: state.version.clone(),
    })
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    "OK"
}
