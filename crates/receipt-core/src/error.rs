//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Payload shape/format failures                  │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  ├── StoreError       - Lookup failures                                │
//! │  └── ServiceError     - ValidationError | StoreError                   │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)     │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → ApiError → HTTP 400/404        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, item index)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt payload validation errors.
///
/// Validation aborts on the first failing stage, so a receipt never
/// reaches the calculator half-checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more top-level receipt fields are absent.
    ///
    /// `fields` lists every missing name in declaration order
    /// (`retailer`, `purchaseDate`, `purchaseTime`, `items`, `total`).
    #[error("The receipt is invalid: missing {}", .fields.join(", "))]
    MissingTopLevelField { fields: Vec<&'static str> },

    /// An item lacks its description or its price.
    ///
    /// ## When This Occurs
    /// - `shortDescription` absent or blank after trimming
    /// - `price` absent
    ///
    /// Processing of the whole receipt stops; no partial score exists.
    #[error("Item at index {index} does not have the required field {field}")]
    MissingItemField { index: usize, field: &'static str },

    /// A field is present but its text cannot be interpreted.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
