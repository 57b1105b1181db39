//! Wall-clock helper for balance and history timestamps

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds
///
/// Used by the in-memory stores to stamp writes and by zero-balance reads
/// for unseen users.
pub fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before Unix epoch")
        .as_millis() as i64
}
