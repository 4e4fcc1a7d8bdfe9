use std::sync::Mutex;

use chrono::{DateTime, Utc};
use plaid_api::model::TransactionCode;
use serde::Serialize;
use tracing::debug;

use crate::core::{Account, Transaction};
use crate::poller::TransactionObserver;

/// Event types an entity can raise, one per transaction code.
pub fn event_types() -> Vec<&'static str> {
    TransactionCode::ALL.iter().map(|code| code.as_str()).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionEvent {
    pub event_type: &'static str,
    pub transaction_id: String,
    pub amount: f64,
    pub name: String,
    pub currency: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub pending: bool,
}

/// Transaction event stream for one account. Registered with the poller as
/// an observer; the presentation loop drains raised events after each poll.
pub struct TransactionEventEntity {
    account_id: String,
    name: String,
    events: Mutex<Vec<TransactionEvent>>,
}

impl TransactionEventEntity {
    pub fn new(account: &Account) -> Self {
        Self {
            account_id: account.id.clone(),
            name: account.name.clone(),
            events: Mutex::new(vec![]),
        }
    }

    pub fn name(&self) -> String {
        format!("{} Transactions", self.name)
    }

    pub fn entity_id(&self) -> String {
        format!("plaid-{}-transactions", self.account_id)
    }

    pub fn take_events(&self) -> Vec<TransactionEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl TransactionObserver for TransactionEventEntity {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn on_transaction(&self, txn: &Transaction) {
        if txn.account_id != self.account_id {
            return;
        }

        // No transaction code means no event type to key the notification
        // by; such entries still reach the sensor window.
        let Some(code) = txn.code else {
            debug!(id = %txn.id, "transaction carries no code, skipping event");
            return;
        };

        debug!(id = %txn.id, code = %code, "transaction event fired");
        self.events.lock().unwrap().push(TransactionEvent {
            event_type: code.as_str(),
            transaction_id: txn.id.clone(),
            amount: txn.amount,
            name: txn.name.clone(),
            currency: txn.currency.clone(),
            timestamp: txn.timestamp,
            pending: txn.pending,
        });
    }
}
