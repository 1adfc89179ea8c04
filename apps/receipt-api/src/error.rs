//! Error types for the Receipt API.
//!
//! Every failure reaches the client as a JSON body:
//! ```json
//! { "error": "No receipt found for that ID", "code": "NOT_FOUND" }
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_store::ServiceError;
use serde::Serialize;
use thiserror::Error;

/// Message returned for unknown receipt ids.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID";

/// Receipt API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Body is not JSON or does not have the receipt shape.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body has the receipt shape but fails validation.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(e) => ApiError::Validation(e.to_string()),
            ServiceError::Store(_) => ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg)
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::ValidationError;
    use receipt_store::StoreError;

    #[test]
    fn test_service_errors_map_to_status() {
        let err: ApiError = ServiceError::Store(StoreError::not_found("x")).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err: ApiError = ServiceError::Validation(ValidationError::MissingItemField {
            index: 0,
            field: "price",
        })
        .into();
        assert!(matches!(&err, ApiError::Validation(msg) if msg.contains("index 0")));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
