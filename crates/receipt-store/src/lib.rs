//! # receipt-store: Storage and Processing for the Receipt Processor
//!
//! This crate owns every scored receipt and implements the two operations
//! the API layer calls: process a receipt and look up its points.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (POST /receipts/process)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐          ┌──────────────────────────┐   │   │
//! │  │   │  ReceiptService  │          │      ReceiptStore        │   │   │
//! │  │   │  (service.rs)    │          │      (store.rs)          │   │   │
//! │  │   │                  │  insert  │                          │   │   │
//! │  │   │ validate         │─────────►│ RwLock<                  │   │   │
//! │  │   │ calculate        │  get     │   Vec<ScoredReceipt>,    │   │   │
//! │  │   │                  │─────────►│   HashMap<id, index>>    │   │   │
//! │  │   └──────────────────┘          └──────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │ uses                                                            │
//! │       ▼                                                                 │
//! │  receipt-core (validation + points, pure)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! One [`ReceiptStore`] is built at process start, wrapped in an `Arc` and
//! handed to the [`ReceiptService`]. It lives until the process exits and
//! nothing is persisted.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use receipt_core::types::{ItemPayload, ReceiptPayload};
//! use receipt_store::{ReceiptService, ReceiptStore};
//!
//! let service = ReceiptService::new(Arc::new(ReceiptStore::new()));
//!
//! let id = service
//!     .process_receipt(ReceiptPayload {
//!         retailer: Some("Walgreens".to_string()),
//!         purchase_date: Some("2022-01-02".to_string()),
//!         purchase_time: Some("08:13".to_string()),
//!         items: Some(vec![
//!             ItemPayload::new("Pepsi - 12-oz", "1.25"),
//!             ItemPayload::new("Dasani", "1.40"),
//!         ]),
//!         total: Some("2.65".into()),
//!     })
//!     .unwrap();
//!
//! assert_eq!(service.get_points(&id).unwrap(), 15);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServiceError, StoreError};
pub use service::ReceiptService;
pub use store::ReceiptStore;
