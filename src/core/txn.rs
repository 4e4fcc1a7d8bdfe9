use chrono::{DateTime, NaiveTime, Utc};
use plaid_api::model::{self, TransactionCode};
use serde::{Deserialize, Serialize};

/// Canonical transaction record. Immutable once issued upstream; instances
/// arrive only through the incremental sync feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub amount: f64,
    pub currency: Option<String>,
    pub name: String,
    pub merchant: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub pending: bool,
    pub code: Option<TransactionCode>,
}

impl From<model::Transaction> for Transaction {
    fn from(model: model::Transaction) -> Self {
        // Some feeds omit the precise datetime; fall back to midnight of
        // the posting date so window ordering stays defined.
        let timestamp = model
            .datetime
            .unwrap_or_else(|| model.date.and_time(NaiveTime::MIN).and_utc());

        Self {
            id: model.transaction_id,
            account_id: model.account_id,
            amount: model.amount,
            currency: model.iso_currency_code,
            name: model.name,
            merchant: model.merchant_name,
            timestamp,
            pending: model.pending,
            code: model.transaction_code,
        }
    }
}
