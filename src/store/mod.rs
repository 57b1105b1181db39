//! In-memory storage collaborators
//!
//! Default implementations of the storage traits from [`crate::core::traits`]:
//! - `balance`: concurrent latest-balance store
//! - `history`: concurrent append-only transaction log
//!
//! Both are individually thread-safe but offer no cross-call atomicity;
//! the engine's per-user lock provides that.

pub mod balance;
pub mod history;

pub use balance::InMemoryBalanceStore;
pub use history::InMemoryHistoryLog;
