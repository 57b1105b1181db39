//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `balance`: Balance-related types
//! - `transaction`: Transaction-related types and identifiers
//! - `error`: Error types for the point ledger
//! - `time`: Wall-clock helper for timestamps

pub mod balance;
pub mod error;
pub mod time;
pub mod transaction;

pub use balance::UserBalance;
pub use error::{LedgerError, StoreError};
pub use time::epoch_millis;
pub use transaction::{RecordId, TransactionRecord, TransactionType, UserId};
