//! In-memory balance store
//!
//! This module provides `InMemoryBalanceStore`, the default
//! [`BalanceStore`] implementation backed by a concurrent map.
//!
//! # Thread Safety
//!
//! All operations are thread-safe through DashMap's internal sharding.
//! The store is safe for concurrent calls with distinct keys; concurrent
//! read-modify-write cycles on the same key are the engine's problem to
//! serialize, not the store's.

use crate::core::traits::BalanceStore;
use crate::types::{epoch_millis, StoreError, UserBalance, UserId};
use dashmap::DashMap;

/// Concurrent in-memory implementation of [`BalanceStore`]
///
/// Holds the latest balance per user. Writes stamp `updated_ms` with the
/// store's own clock, so callers never supply timestamps.
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    /// Latest balance per user
    balances: DashMap<UserId, UserBalance>,
}

impl InMemoryBalanceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        InMemoryBalanceStore {
            balances: DashMap::new(),
        }
    }

    /// Number of users with a stored balance
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// True if no balance has been written yet
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl BalanceStore for InMemoryBalanceStore {
    /// Get a snapshot of the user's stored balance
    ///
    /// Returns a clone; concurrent writes after the call are not reflected
    /// in the returned value.
    fn get(&self, user_id: UserId) -> Result<Option<UserBalance>, StoreError> {
        Ok(self
            .balances
            .get(&user_id)
            .map(|entry| entry.value().clone()))
    }

    /// Upsert the user's balance, stamped with the current time
    fn put(&self, user_id: UserId, points: i64) -> Result<UserBalance, StoreError> {
        let balance = UserBalance {
            user_id,
            points,
            updated_ms: epoch_millis(),
        };
        self.balances.insert(user_id, balance.clone());
        Ok(balance)
    }
}
