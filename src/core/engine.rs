//! Point ledger engine
//!
//! This module provides the `LedgerEngine` that orchestrates balance
//! queries, charges, and uses by coordinating the Balance Store, the
//! History Log, and the per-user lock registry.
//!
//! The engine enforces the ledger rules:
//! - Amounts must be positive, validated before any lock or side effect
//! - Every read-modify-write of a balance runs under that user's lock,
//!   so concurrent operations on one user never lose updates
//! - Every mutation appends exactly one history record before the
//!   balance write becomes visible
//! - A use that would drive the balance negative is rejected without
//!   writing the balance
//!
//! # Known inconsistency
//!
//! The history record is appended before the sufficiency check, so a use
//! rejected with `InsufficientBalance` (or a charge rejected on overflow,
//! or any store failure between append and write) leaves a record with no
//! matching balance change. The engine logs a warning when this happens
//! and the behavior is locked in by tests; resolving it is a deliberate
//! future behavior change, not a silent fix.

use crate::core::lock_registry::LockRegistry;
use crate::core::traits::{BalanceStore, HistoryLog};
use crate::store::{InMemoryBalanceStore, InMemoryHistoryLog};
use crate::types::{LedgerError, TransactionRecord, TransactionType, UserBalance, UserId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Point ledger engine
///
/// Orchestrates ledger operations over a Balance Store and History Log,
/// serializing same-user mutations through a per-user lock registry while
/// operations on different users run in parallel.
///
/// The engine is generic over its storage collaborators with the in-memory
/// implementations as defaults; `with_stores` injects alternatives.
///
/// # Thread Safety
///
/// All operations take `&self`. The engine is `Clone` with shared internals,
/// so one engine value can be handed to any number of threads or tasks;
/// clones operate on the same stores and the same lock registry.
pub struct LedgerEngine<B = InMemoryBalanceStore, H = InMemoryHistoryLog> {
    balances: Arc<B>,
    history_log: Arc<H>,
    locks: Arc<LockRegistry>,
}

impl LedgerEngine {
    /// Create an engine over fresh in-memory stores
    ///
    /// # Returns
    ///
    /// A new LedgerEngine with no balances, no history, and no locks.
    pub fn new() -> Self {
        Self::with_stores(
            Arc::new(InMemoryBalanceStore::new()),
            Arc::new(InMemoryHistoryLog::new()),
        )
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, H> LedgerEngine<B, H>
where
    B: BalanceStore,
    H: HistoryLog,
{
    /// Create an engine over injected storage collaborators
    ///
    /// Callers keep their own `Arc` handles to observe or share the stores;
    /// the lock registry is created fresh and scoped to this engine (and
    /// its clones), so separate engines never contend with each other.
    ///
    /// # Arguments
    ///
    /// * `balances` - The Balance Store collaborator
    /// * `history_log` - The History Log collaborator
    pub fn with_stores(balances: Arc<B>, history_log: Arc<H>) -> Self {
        LedgerEngine {
            balances,
            history_log,
            locks: Arc::new(LockRegistry::new()),
        }
    }

    /// Query a user's current balance
    ///
    /// Takes no lock: the read is a single store call and the store handles
    /// its own internal consistency. For a user with no stored balance,
    /// returns a fresh zero balance stamped at the time of the read without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error only if the Balance Store fails.
    pub fn balance(&self, user_id: UserId) -> Result<UserBalance, LedgerError> {
        let balance = self
            .balances
            .get(user_id)?
            .unwrap_or_else(|| UserBalance::new(user_id));
        Ok(balance)
    }

    /// Charge (credit) points to a user's balance
    ///
    /// Under the user's lock: appends the history record, reads the current
    /// balance, adds `amount`, and writes the result. A first-time user
    /// starts from zero.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user to credit
    /// * `amount` - Points to add; must be positive
    ///
    /// # Returns
    ///
    /// The balance after the charge.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative (`InvalidAmount`, no side effects)
    /// - The addition would overflow (`BalanceOverflow`, balance unchanged)
    /// - A storage collaborator fails (`Store`)
    pub fn charge(&self, user_id: UserId, amount: i64) -> Result<UserBalance, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount("charge", amount));
        }

        let _guard = self.locks.acquire(user_id);

        // Record intent first, then apply the balance write (see the
        // module docs for the inconsistency this ordering can leave).
        let record = self.history_log.append(user_id, amount, TransactionType::Charge)?;

        let current = self.current_points(user_id)?;
        let new_points = match current.checked_add(amount) {
            Some(points) => points,
            None => {
                warn!(
                    user_id,
                    record_id = record.id,
                    balance = current,
                    amount,
                    "charge rejected on overflow; appended history record has no balance write"
                );
                return Err(LedgerError::balance_overflow("charge", user_id));
            }
        };

        let updated = self.balances.put(user_id, new_points)?;
        debug!(user_id, amount, points = updated.points, "charge applied");
        Ok(updated)
    }

    /// Use (debit) points from a user's balance
    ///
    /// Under the user's lock: appends the history record, reads the current
    /// balance, checks sufficiency, subtracts `amount`, and writes the
    /// result. The operation is named `use_points` because `use` is a Rust
    /// keyword.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user to debit
    /// * `amount` - Points to subtract; must be positive
    ///
    /// # Returns
    ///
    /// The balance after the use; never negative.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative (`InvalidAmount`, no side effects)
    /// - The balance is smaller than `amount` (`InsufficientBalance`,
    ///   balance unchanged; the history record of the attempt remains)
    /// - A storage collaborator fails (`Store`)
    pub fn use_points(&self, user_id: UserId, amount: i64) -> Result<UserBalance, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount("use", amount));
        }

        let _guard = self.locks.acquire(user_id);

        // Appended before the sufficiency check, matching the recorded
        // behavior this engine preserves.
        let record = self.history_log.append(user_id, amount, TransactionType::Use)?;

        let current = self.current_points(user_id)?;
        if current < amount {
            warn!(
                user_id,
                record_id = record.id,
                balance = current,
                requested = amount,
                "use rejected for insufficient balance; appended history record has no balance write"
            );
            return Err(LedgerError::insufficient_balance(user_id, current, amount));
        }

        let updated = self.balances.put(user_id, current - amount)?;
        debug!(user_id, amount, points = updated.points, "use applied");
        Ok(updated)
    }

    /// List a user's transaction history in append order
    ///
    /// Takes no lock; the log handles its own consistency for reads.
    /// Includes records of rejected attempts (see the module docs), so the
    /// count can exceed the number of successful operations.
    ///
    /// # Errors
    ///
    /// Returns an error only if the History Log fails.
    pub fn history(&self, user_id: UserId) -> Result<Vec<TransactionRecord>, LedgerError> {
        let records = self.history_log.list_by_user(user_id)?;
        Ok(records)
    }

    /// Number of users a lock has been created for
    ///
    /// Lock entries are created on first mutation and never removed, so
    /// this grows monotonically with the set of mutated users. Exposed for
    /// observing the registry's documented retention behavior.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    /// Points currently stored for a user, zero if unseen
    fn current_points(&self, user_id: UserId) -> Result<i64, LedgerError> {
        let points = self
            .balances
            .get(user_id)?
            .map(|balance| balance.points)
            .unwrap_or(0);
        Ok(points)
    }
}

impl<B, H> Clone for LedgerEngine<B, H> {
    fn clone(&self) -> Self {
        LedgerEngine {
            balances: Arc::clone(&self.balances),
            history_log: Arc::clone(&self.history_log),
            locks: Arc::clone(&self.locks),
        }
    }
}
