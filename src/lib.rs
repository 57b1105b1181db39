//! Point Ledger Library
//! # Overview
//!
//! This library maintains a per-user point (credit) balance with an
//! append-only transaction history, safe under concurrent charge and use
//! operations from many threads.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (UserBalance, TransactionRecord, errors)
//! - [`core`] - Concurrency-control core:
//!   - [`core::lock_registry`] - Per-user mutual-exclusion lock table
//!   - [`core::engine`] - Ledger operation orchestration
//!   - [`core::traits`] - Storage collaborator seams
//! - [`store`] - In-memory implementations of the storage collaborators
//!
//! # Operations
//!
//! The engine exposes four operations:
//!
//! - **balance**: Read a user's current balance (zero for unseen users)
//! - **charge**: Credit points to a user's balance
//! - **use_points**: Debit points from a user's balance (requires a
//!   sufficient balance)
//! - **history**: List a user's transaction records in append order
//!
//! # Concurrency model
//!
//! Every read-modify-write runs under a lazily created per-user lock, so
//! concurrent operations on one user are totally ordered (no lost updates)
//! while operations on different users run fully in parallel. Lock objects
//! are never removed; the registry grows with the set of mutated users.
//!
//! # Example
//!
//! ```
//! use point_ledger::LedgerEngine;
//!
//! let engine = LedgerEngine::new();
//! engine.charge(7, 1000).unwrap();
//! let balance = engine.use_points(7, 300).unwrap();
//! assert_eq!(balance.points, 700);
//! assert_eq!(engine.history(7).unwrap().len(), 2);
//! ```

// Module declarations
pub mod core;
pub mod store;
pub mod types;

pub use core::{BalanceStore, HistoryLog, LedgerEngine, LockRegistry, UserLockGuard};
pub use store::{InMemoryBalanceStore, InMemoryHistoryLog};
pub use types::{
    LedgerError, RecordId, StoreError, TransactionRecord, TransactionType, UserBalance, UserId,
};
