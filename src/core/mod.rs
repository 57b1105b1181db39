//! Core ledger logic module
//!
//! This module contains the concurrency-control core of the ledger:
//! - `traits` - Trait abstractions for the storage collaborators
//! - `lock_registry` - Per-user mutual-exclusion lock table
//! - `engine` - Ledger operation orchestration

pub mod engine;
pub mod lock_registry;
pub mod traits;

pub use engine::LedgerEngine;
pub use lock_registry::{LockRegistry, UserLockGuard};
pub use traits::{BalanceStore, HistoryLog};
