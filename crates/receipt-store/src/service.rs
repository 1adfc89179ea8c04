//! # Receipt Service
//!
//! The operations the API layer calls.
//!
//! ## ProcessReceipt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process_receipt(payload)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_receipt ──── Err ──► ServiceError::Validation (store untouched)│
//! │       │ Ok(Receipt)                                                     │
//! │       ▼                                                                 │
//! │  points::breakdown ──► debug! per-rule contributions                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptStore::insert(points) ──► id                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use receipt_core::points;
use receipt_core::{validate_receipt, ReceiptPayload, ScoredReceipt};
use tracing::{debug, info, warn};

use crate::error::ServiceError;
use crate::store::ReceiptStore;

/// Validates, scores and stores receipts.
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct ReceiptService {
    store: Arc<ReceiptStore>,
}

impl ReceiptService {
    /// Creates a service over an existing store.
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        ReceiptService { store }
    }

    /// Scores a submitted receipt and stores the result.
    ///
    /// ## Returns
    /// - `Ok(id)` - the new receipt id
    /// - `Err(ServiceError::Validation)` - nothing was stored
    pub fn process_receipt(&self, payload: ReceiptPayload) -> Result<String, ServiceError> {
        let receipt = validate_receipt(payload).map_err(|e| {
            warn!(error = %e, "Receipt rejected");
            e
        })?;

        let breakdown = points::breakdown(&receipt);
        debug!(retailer = %receipt.retailer, ?breakdown, "Receipt scored");

        let points = breakdown.total();
        let id = self.store.insert(points);
        info!(%id, points, "Receipt processed");
        Ok(id)
    }

    /// Returns the points stored under `id`.
    pub fn get_points(&self, id: &str) -> Result<u64, ServiceError> {
        Ok(self.store.get(id)?)
    }

    /// All scored receipts, oldest first.
    pub fn list_receipts(&self) -> Vec<ScoredReceipt> {
        self.store.list()
    }

    /// Number of scored receipts.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
