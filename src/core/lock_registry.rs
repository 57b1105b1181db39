//! Per-user lock registry
//!
//! This module provides the `LockRegistry` struct, the mutual-exclusion
//! table that serializes balance mutations per user while letting
//! operations on different users run fully in parallel.
//!
//! # Design
//!
//! The registry maps each user ID to an `Arc<parking_lot::Mutex<()>>`,
//! created lazily through `DashMap`'s atomic entry API. The atomic
//! get-or-create guarantees at most one lock object ever exists per user;
//! a duplicate would let two operations for the same user proceed
//! unlocked against each other.
//!
//! Entries are never removed. The user space is bounded and small
//! relative to memory in the target deployment, so the retained entries
//! are a documented scaling limit rather than a leak.
//!
//! # Thread Safety
//!
//! `acquire` clones the `Arc` out of the map entry before blocking, so a
//! thread waiting on a contended user never holds a map shard lock and
//! never stalls lookups for unrelated users.

use crate::types::UserId;
use dashmap::DashMap;
use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};
use std::sync::Arc;

/// Exclusive hold on one user's lock
///
/// Returned by [`LockRegistry::acquire`]. The lock is released when the
/// guard is dropped, which covers every exit path of the guarded section
/// including early error returns.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct UserLockGuard {
    _guard: ArcMutexGuard<RawMutex, ()>,
}

/// Registry of per-user mutual-exclusion locks
///
/// Two `acquire` calls with the same user ID return guards that mutually
/// exclude; calls with different user IDs never block each other.
///
/// # Thread Safety
///
/// All methods take `&self` and are safe to call from any number of
/// threads. The map's insert-if-absent is atomic, held only for the brief
/// lookup/create step and never for the duration of a guarded section.
#[derive(Debug, Default)]
pub struct LockRegistry {
    /// Concurrent map from user ID to that user's lock object
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl LockRegistry {
    /// Create a new empty LockRegistry
    ///
    /// Lock objects are created on demand by [`LockRegistry::acquire`].
    pub fn new() -> Self {
        LockRegistry {
            locks: DashMap::new(),
        }
    }

    /// Acquire exclusive ownership of the lock for a user
    ///
    /// Lazily creates the lock object on the first acquisition for this
    /// user. Blocks the calling thread until the previous holder (if any)
    /// releases. Acquisition has no timeout and no failure mode; callers
    /// hold at most one user's lock at a time, so no deadlock is possible.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose operations must be serialized
    ///
    /// # Returns
    ///
    /// A guard that releases the lock on drop.
    pub fn acquire(&self, user_id: UserId) -> UserLockGuard {
        // Clone the Arc out of the entry so the map shard is released
        // before blocking on the user's own mutex.
        let lock = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        UserLockGuard {
            _guard: lock.lock_arc(),
        }
    }

    /// Number of users a lock object has been created for
    ///
    /// Grows monotonically; entries are never removed.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// True if no lock object has been created yet
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
