//! # Receipt Store
//!
//! Append-only, in-memory keeper of [`ScoredReceipt`] records.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ReceiptStore Locking                                 │
//! │                                                                         │
//! │  Request A: insert(28) ──► write lock ──► push + index ──► release     │
//! │  Request B: get(id)    ──► read lock  ──► index lookup ──► release     │
//! │  Request C: list()     ──► read lock  ──► clone Vec    ──► release     │
//! │                                                                         │
//! │  • Inserts are exclusive against inserts AND reads                      │
//! │  • Reads run concurrently with each other                               │
//! │  • No operation holds the lock across I/O                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A panic while a guard is held cannot leave a half-written record: the
//! record is pushed and indexed with no fallible step in between. A
//! poisoned lock is therefore recovered rather than propagated.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use receipt_core::ScoredReceipt;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct Inner {
    /// Records in insertion order.
    records: Vec<ScoredReceipt>,
    /// id → position in `records`.
    index: HashMap<String, usize>,
}

/// Process-lifetime store of scored receipts.
///
/// ## Invariants
/// - Ids are unique; an existing id is never overwritten
/// - Records are never mutated, reordered or removed
#[derive(Debug, Default)]
pub struct ReceiptStore {
    inner: RwLock<Inner>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `points` under a fresh UUID v4 and returns the id.
    pub fn insert(&self, points: u64) -> String {
        let mut inner = self.write();

        let mut id = Uuid::new_v4().to_string();
        while inner.index.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let position = inner.records.len();
        inner.records.push(ScoredReceipt {
            id: id.clone(),
            points,
        });
        inner.index.insert(id.clone(), position);

        debug!(%id, points, stored = position + 1, "Receipt stored");
        id
    }

    /// Looks up the points recorded under `id` (exact match).
    pub fn get(&self, id: &str) -> StoreResult<u64> {
        let inner = self.read();
        inner
            .index
            .get(id)
            .map(|&position| inner.records[position].points)
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Returns every record in insertion order.
    pub fn list(&self) -> Vec<ScoredReceipt> {
        self.read().records.clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
