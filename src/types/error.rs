//! Error types for the point ledger
//!
//! This module defines all error types that can occur during ledger
//! operations. Each variant carries enough context for callers to handle
//! the condition without parsing messages.
//!
//! # Error Categories
//!
//! - **Validation Errors**: non-positive amounts, rejected before any lock
//!   or side effect
//! - **Balance Errors**: insufficient balance, arithmetic overflow — rejected
//!   under the user's lock without writing the balance
//! - **Store Errors**: failures surfaced by the Balance Store or History Log,
//!   propagated unchanged

use super::transaction::UserId;
use thiserror::Error;

/// Main error type for ledger operations
///
/// This enum represents all possible errors that can occur while querying
/// or mutating a user's balance. Validation and balance errors are expected,
/// caller-correctable conditions; store errors are the collaborator's fault
/// and are surfaced as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount was zero or negative
    ///
    /// Detected before any lock is acquired or side effect performed.
    /// This is a recoverable error - the caller can retry with a
    /// positive amount.
    #[error("Invalid amount {amount} for {operation}: amount must be positive")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The rejected amount
        amount: i64,
    },

    /// Use would drive the balance negative
    ///
    /// Detected under the user's lock; the balance is left unchanged.
    /// Note that the history record for the attempt has already been
    /// appended at this point (see the engine documentation for this
    /// known inconsistency).
    #[error("Insufficient balance for user {user_id}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// User ID
        user_id: UserId,
        /// Balance observed by the sufficiency check
        balance: i64,
        /// Requested use amount
        requested: i64,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the balance write is rejected to
    /// keep the stored value meaningful.
    #[error("Balance overflow in {operation} for user {user_id}")]
    BalanceOverflow {
        /// Operation that would overflow
        operation: String,
        /// User ID
        user_id: UserId,
    },

    /// Failure surfaced by the Balance Store or History Log
    ///
    /// Propagated unchanged to the caller; the engine performs no
    /// automatic retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors surfaced by the storage collaborators
///
/// The in-memory implementations never fail; these variants exist for
/// external store implementations and test doubles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// I/O error in the underlying backend
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Backend rejected the call
    ///
    /// Covers capacity limits, shutdown, and similar backend-side refusals.
    #[error("Store unavailable: {message}")]
    Unavailable {
        /// Reason reported by the backend
        message: String,
    },
}

// Conversion from io::Error to StoreError
impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: i64) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(user_id: UserId, balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientBalance {
            user_id,
            balance,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(operation: &str, user_id: UserId) -> Self {
        LedgerError::BalanceOverflow {
            operation: operation.to_string(),
            user_id,
        }
    }
}

impl StoreError {
    /// Create an Unavailable error
    pub fn unavailable(message: &str) -> Self {
        StoreError::Unavailable {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount_zero(
        LedgerError::InvalidAmount { operation: "charge".to_string(), amount: 0 },
        "Invalid amount 0 for charge: amount must be positive"
    )]
    #[case::invalid_amount_negative(
        LedgerError::InvalidAmount { operation: "use".to_string(), amount: -50 },
        "Invalid amount -50 for use: amount must be positive"
    )]
    #[case::insufficient_balance(
        LedgerError::InsufficientBalance { user_id: 7, balance: 700, requested: 1000 },
        "Insufficient balance for user 7: balance 700, requested 1000"
    )]
    #[case::balance_overflow(
        LedgerError::BalanceOverflow { operation: "charge".to_string(), user_id: 1 },
        "Balance overflow in charge for user 1"
    )]
    #[case::store_io(
        LedgerError::Store(StoreError::Io { message: "disk full".to_string() }),
        "I/O error: disk full"
    )]
    #[case::store_unavailable(
        LedgerError::Store(StoreError::Unavailable { message: "shutting down".to_string() }),
        "Store unavailable: shutting down"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        LedgerError::invalid_amount("charge", -1),
        LedgerError::InvalidAmount { operation: "charge".to_string(), amount: -1 }
    )]
    #[case::insufficient_balance(
        LedgerError::insufficient_balance(7, 700, 1000),
        LedgerError::InsufficientBalance { user_id: 7, balance: 700, requested: 1000 }
    )]
    #[case::balance_overflow(
        LedgerError::balance_overflow("use", 3),
        LedgerError::BalanceOverflow { operation: "use".to_string(), user_id: 3 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: StoreError = io_error.into();
        assert!(matches!(error, StoreError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_store_error_wraps_into_ledger_error() {
        let error: LedgerError = StoreError::unavailable("closed").into();
        assert_eq!(
            error,
            LedgerError::Store(StoreError::Unavailable {
                message: "closed".to_string()
            })
        );
    }
}
