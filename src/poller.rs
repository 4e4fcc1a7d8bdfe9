use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::{Account, Transaction};
use crate::upstream::{AccountSource, TransactionSource};

/// Default minimum spacing between upstream refreshes.
pub const MIN_TIME_BETWEEN_UPDATES: Duration = Duration::from_secs(30 * 60);

/// Receives each newly synced transaction for one account.
pub trait TransactionObserver: Send + Sync {
    fn account_id(&self) -> &str;

    fn on_transaction(&self, txn: &Transaction);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Inside the minimum interval; cached state returned unchanged.
    Throttled,
    /// The account fetch failed; the poller is unavailable and the cached
    /// snapshot is untouched.
    Unavailable,
    /// Accounts refreshed. Transactions refreshed too, unless the sync
    /// failed, which leaves the previous batch and cursor in place.
    Refreshed,
}

/// Polls the upstream source and caches the latest snapshot.
///
/// Availability is gated by the account fetch alone; a transaction-sync
/// failure is logged without revoking it. The sync cursor lives only in
/// this struct, so a restart re-syncs the transaction feed from scratch.
pub struct Poller<S> {
    source: S,
    min_interval: Duration,
    last_poll: Option<Instant>,
    available: bool,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    cursor: Option<String>,
    observers: Vec<Arc<dyn TransactionObserver>>,
}

impl<S> Poller<S>
where
    S: AccountSource + TransactionSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            min_interval: MIN_TIME_BETWEEN_UPDATES,
            last_poll: None,
            available: false,
            accounts: vec![],
            transactions: vec![],
            cursor: None,
            observers: vec![],
        }
    }

    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    pub fn with_observers(mut self, observers: Vec<Arc<dyn TransactionObserver>>) -> Self {
        self.observers = observers;
        self
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The most recent sync batch, across all accounts.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    #[tracing::instrument(skip(self))]
    pub async fn poll(&mut self) -> PollOutcome {
        if let Some(last) = self.last_poll {
            if last.elapsed() < self.min_interval {
                debug!("inside minimum poll interval, returning cached state");
                return PollOutcome::Throttled;
            }
        }
        self.last_poll = Some(Instant::now());

        let accounts = match self.source.accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                warn!(%err, "account refresh failed, marking unavailable");
                self.available = false;
                return PollOutcome::Unavailable;
            }
        };
        self.available = true;
        self.accounts = accounts;
        debug!(accounts = self.accounts.len(), "refreshed account snapshot");

        let had_cursor = self.cursor.is_some();
        let batch = match self.source.sync(self.cursor.as_deref()).await {
            Ok(batch) => batch,
            Err(err) => {
                warn!(%err, "transaction sync failed, keeping previous batch and cursor");
                return PollOutcome::Refreshed;
            }
        };
        debug!(
            added = batch.added.len(),
            cursor = %batch.next_cursor,
            "synced transactions"
        );

        // The first sync backfills history; only later deltas raise events.
        if had_cursor {
            for txn in &batch.added {
                for observer in &self.observers {
                    if observer.account_id() == txn.account_id {
                        observer.on_transaction(txn);
                    }
                }
            }
        }

        self.transactions = batch.added;
        self.cursor = Some(batch.next_cursor);

        PollOutcome::Refreshed
    }
}
