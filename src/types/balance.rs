//! Balance-related types for the point ledger
//!
//! This module defines the UserBalance structure holding the latest
//! point balance snapshot for a single user.

use super::time::epoch_millis;
use super::transaction::UserId;
use serde::{Deserialize, Serialize};

/// Latest point balance for one user
///
/// The Balance Store holds exactly one live instance per user; history is
/// kept separately in the History Log. Mutated only by the ledger engine
/// under the user's lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBalance {
    /// The user ID
    pub user_id: UserId,

    /// Current points
    ///
    /// Never negative after a successful operation: charges add to it and
    /// uses are rejected before they could push it below zero.
    pub points: i64,

    /// Epoch milliseconds of the last balance write
    ///
    /// For a zero balance materialized on first read of an unseen user,
    /// this is the time of that read.
    pub updated_ms: i64,
}

impl UserBalance {
    /// Create a zero balance for a previously unseen user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user ID for this balance
    ///
    /// # Returns
    ///
    /// A new UserBalance with zero points, stamped with the current time.
    pub fn new(user_id: UserId) -> Self {
        UserBalance {
            user_id,
            points: 0,
            updated_ms: epoch_millis(),
        }
    }
}
