//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (receipt-core)      StoreError (this module)          │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │               ServiceError                                              │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  ApiError (in receipt-api) ← status code + JSON body                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipt_core::ValidationError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("No receipt found for that ID: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Errors from `ProcessReceipt` / `GetPoints`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The submitted receipt was rejected; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
