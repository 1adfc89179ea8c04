//! Receipt endpoints
//!
//! - POST /receipts/process - Score and store a receipt
//! - GET /receipts/{id} - Points for a receipt
//! - GET /receipts/{id}/points - Same as above
//! - GET /receipts - Every scored receipt, oldest first

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipt_core::{ReceiptPayload, ScoredReceipt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Body of a successful points lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Submit a receipt for processing
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(payload) = payload?;
    let id = state.receipts.process_receipt(payload)?;
    Ok(Json(ProcessResponse { id }))
}

/// Get the points awarded to a receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    debug!(%id, "Points lookup");
    let points = state.receipts.get_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// List every stored receipt
pub async fn list_receipts(State(state): State<AppState>) -> Json<Vec<ScoredReceipt>> {
    Json(state.receipts.list_receipts())
}
