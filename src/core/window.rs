use std::collections::HashSet;

use super::Transaction;

/// Upper bound on the per-account recent-transaction window.
pub const WINDOW_SIZE: usize = 10;

/// Merges newly synced transactions into an account's cached window.
///
/// Incoming entries are filtered to the account, appended after the cached
/// entries, deduplicated by transaction id keeping the first occurrence,
/// stable-sorted newest first, and truncated to [`WINDOW_SIZE`]. On equal
/// timestamps cached entries stay ahead of incoming ones.
pub fn merge(
    cached: &[Transaction],
    incoming: &[Transaction],
    account_id: &str,
) -> Vec<Transaction> {
    let mut merged: Vec<Transaction> = cached.to_vec();
    merged.extend(
        incoming
            .iter()
            .filter(|tx| tx.account_id == account_id)
            .cloned(),
    );

    let mut seen = HashSet::new();
    merged.retain(|tx| seen.insert(tx.id.clone()));

    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    merged.truncate(WINDOW_SIZE);

    merged
}
