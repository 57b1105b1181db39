//! In-memory history log
//!
//! This module provides `InMemoryHistoryLog`, the default [`HistoryLog`]
//! implementation backed by a concurrent map of per-user record vectors.
//!
//! # Design
//!
//! Record identifiers come from a single atomic sequence starting at 1.
//! The identifier is drawn while holding the user's map entry, so within
//! one user's list the identifiers are strictly increasing in append
//! order even when callers bypass the engine's per-user lock.
//!
//! # Thread Safety
//!
//! All operations are thread-safe through DashMap's internal sharding.
//! Appends for different users proceed in parallel; appends for the same
//! user serialize briefly on that user's map entry.

use crate::core::traits::HistoryLog;
use crate::types::{epoch_millis, StoreError, TransactionRecord, TransactionType, UserId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent in-memory implementation of [`HistoryLog`]
///
/// Records are kept per user in append order and never mutated or removed.
#[derive(Debug)]
pub struct InMemoryHistoryLog {
    /// Records per user, in append order
    records: DashMap<UserId, Vec<TransactionRecord>>,

    /// Next record identifier to assign
    next_id: AtomicU64,
}

impl InMemoryHistoryLog {
    /// Create a new empty log
    ///
    /// The first appended record receives identifier 1.
    pub fn new() -> Self {
        InMemoryHistoryLog {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Total number of records across all users
    pub fn len(&self) -> usize {
        self.records.iter().map(|entry| entry.value().len()).sum()
    }

    /// True if no record has been appended yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryHistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog for InMemoryHistoryLog {
    /// Append one record, assigning its identifier and timestamp
    fn append(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionType,
    ) -> Result<TransactionRecord, StoreError> {
        let mut entry = self.records.entry(user_id).or_insert_with(Vec::new);

        // Draw the id while holding the entry so ids within one user's
        // list are increasing in append order.
        let record = TransactionRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            user_id,
            amount,
            kind,
            recorded_ms: epoch_millis(),
        };
        entry.value_mut().push(record.clone());

        Ok(record)
    }

    /// List the user's records in append order
    ///
    /// Returns a snapshot clone; appends after the call are not reflected
    /// in the returned vector.
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>, StoreError> {
        Ok(self
            .records
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
