//! Core traits for the storage collaborators
//!
//! This module defines the trait abstractions behind which the Balance Store
//! and History Log live. The engine depends only on these seams, so the
//! in-memory implementations can be swapped for persistent ones without
//! touching the locking protocol.
//!
//! Both traits require `Send + Sync`: implementations must be individually
//! thread-safe for their own primitive operations. They provide no cross-call
//! atomicity — read-modify-write atomicity is the engine's job, achieved via
//! the per-user lock.

use crate::types::{StoreError, TransactionRecord, TransactionType, UserBalance, UserId};

/// Trait for the store holding the latest balance per user
///
/// The store holds at most one live `UserBalance` per user and replaces it
/// wholesale on every write.
pub trait BalanceStore: Send + Sync {
    /// Get the current balance for a user
    ///
    /// Returns `None` if the user has never been written.
    fn get(&self, user_id: UserId) -> Result<Option<UserBalance>, StoreError>;

    /// Upsert the balance for a user
    ///
    /// The store assigns the `updated_ms` timestamp and returns the record
    /// it stored.
    fn put(&self, user_id: UserId, points: i64) -> Result<UserBalance, StoreError>;
}

/// Trait for the append-only transaction history
///
/// Records are immutable once appended and are never deleted. Ordering is
/// append order per user; no ordering is guaranteed across users.
pub trait HistoryLog: Send + Sync {
    /// Append one record for a user
    ///
    /// The log assigns the record identifier and timestamp and returns the
    /// record it stored.
    fn append(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionType,
    ) -> Result<TransactionRecord, StoreError>;

    /// List a user's records in append order
    ///
    /// Returns an empty vector if the user has no records.
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>, StoreError>;
}
