//! Transaction-related types for the point ledger
//!
//! This module defines the transaction type tag, the immutable history record,
//! and the identifier aliases used throughout the ledger.

use serde::{Deserialize, Serialize};

/// User identifier
///
/// Supports user IDs from 0 to 18,446,744,073,709,551,615
pub type UserId = u64;

/// History record identifier
///
/// Assigned monotonically by the History Log, starting at 1
pub type RecordId = u64;

/// Transaction types supported by the ledger
///
/// Each variant tags a history record with the direction of the balance
/// change. Records carry the positive point magnitude; the tag carries
/// the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Credit points to a user's balance
    ///
    /// Increases the balance by the record's amount.
    Charge,

    /// Debit points from a user's balance
    ///
    /// Decreases the balance by the record's amount. Rejected when it
    /// would drive the balance negative.
    Use,
}

/// Immutable record of one balance operation attempt
///
/// Appended to the History Log exactly once and never updated or deleted.
/// Records are ordered by append order per user; no global total order
/// is guaranteed across users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record identifier, assigned by the History Log
    pub id: RecordId,

    /// The user this record belongs to
    pub user_id: UserId,

    /// Positive point magnitude of the operation
    ///
    /// The sign convention lives in `kind`; see [`TransactionRecord::signed_amount`].
    pub amount: i64,

    /// Direction of the balance change
    pub kind: TransactionType,

    /// Epoch milliseconds at which the log accepted the record
    pub recorded_ms: i64,
}

impl TransactionRecord {
    /// Signed view of the amount
    ///
    /// Positive for charges, negative for uses, matching the convention
    /// upper layers use when summing a user's history.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionType::Charge => self.amount,
            TransactionType::Use => -self.amount,
        }
    }
}
