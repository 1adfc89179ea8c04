//! # receipt-core: Pure Scoring Logic for the Receipt Processor
//!
//! This crate turns a submitted receipt into a loyalty-points score.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-api (HTTP, axum)                        │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ReceiptPayload                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               receipt-store (ReceiptService)                    │   │
//! │  │        validate ──► calculate ──► insert into ReceiptStore      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  points   │  │ validation│  │   │
//! │  │   │  Receipt  │  │   Money   │  │ calculate │  │  payload  │  │   │
//! │  │   │   Item    │  │  (cents)  │  │ breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOCKS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire payloads, validated receipts and scored records
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Payload → receipt validation
//! - [`points`] - The points calculator
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::points::calculate;
//! use receipt_core::types::{ItemPayload, ReceiptPayload};
//! use receipt_core::validation::validate_receipt;
//!
//! let payload = ReceiptPayload {
//!     retailer: Some("M&M Corner Market".to_string()),
//!     purchase_date: Some("2022-03-20".to_string()),
//!     purchase_time: Some("14:33".to_string()),
//!     items: Some(vec![
//!         ItemPayload::new("Gatorade", "2.25"),
//!         ItemPayload::new("Gatorade", "2.25"),
//!         ItemPayload::new("Gatorade", "2.25"),
//!         ItemPayload::new("Gatorade", "2.25"),
//!     ]),
//!     total: Some("9.00".into()),
//! };
//!
//! let receipt = validate_receipt(payload).unwrap();
//! assert_eq!(calculate(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use points::{calculate, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Accepted layout of `purchaseDate` (chrono format string).
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted layout of `purchaseTime` (chrono format string, 24-hour clock).
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";
