use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Account record returned by `/accounts/balance/get`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub name: String,
    pub official_name: Option<String>,
    pub mask: Option<String>,
    pub r#type: String,
    pub subtype: Option<String>,
    pub balances: Balances,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    pub available: Option<f64>,
    pub current: Option<f64>,
    pub limit: Option<f64>,
    pub iso_currency_code: Option<String>,
    pub unofficial_currency_code: Option<String>,
}

/// Transaction record carried in the `added` and `modified` sets of a sync
/// page. `datetime` is nullable upstream; `date` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: String,
    pub amount: f64,
    pub iso_currency_code: Option<String>,
    pub name: String,
    pub merchant_name: Option<String>,
    pub date: NaiveDate,
    pub datetime: Option<DateTime<Utc>>,
    pub pending: bool,
    pub transaction_code: Option<TransactionCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedTransaction {
    pub transaction_id: String,
    pub account_id: Option<String>,
}

/// Category codes Plaid attaches to transaction feed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCode {
    Adjustment,
    Atm,
    #[serde(rename = "bank charge")]
    BankCharge,
    #[serde(rename = "bill payment")]
    BillPayment,
    Cash,
    Cashback,
    Cheque,
    #[serde(rename = "direct debit")]
    DirectDebit,
    Interest,
    Purchase,
    #[serde(rename = "standing order")]
    StandingOrder,
    Transfer,
}

impl TransactionCode {
    pub const ALL: [TransactionCode; 12] = [
        TransactionCode::Adjustment,
        TransactionCode::Atm,
        TransactionCode::BankCharge,
        TransactionCode::BillPayment,
        TransactionCode::Cash,
        TransactionCode::Cashback,
        TransactionCode::Cheque,
        TransactionCode::DirectDebit,
        TransactionCode::Interest,
        TransactionCode::Purchase,
        TransactionCode::StandingOrder,
        TransactionCode::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCode::Adjustment => "adjustment",
            TransactionCode::Atm => "atm",
            TransactionCode::BankCharge => "bank charge",
            TransactionCode::BillPayment => "bill payment",
            TransactionCode::Cash => "cash",
            TransactionCode::Cashback => "cashback",
            TransactionCode::Cheque => "cheque",
            TransactionCode::DirectDebit => "direct debit",
            TransactionCode::Interest => "interest",
            TransactionCode::Purchase => "purchase",
            TransactionCode::StandingOrder => "standing order",
            TransactionCode::Transfer => "transfer",
        }
    }
}

impl std::fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountsBalanceGetRequest {
    pub access_token: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsSyncRequest {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsBalanceGetResponse {
    pub accounts: Vec<Account>,
    pub request_id: String,
}

/// One page of `/transactions/sync`. The caller follows `has_more` with
/// `next_cursor` until the stream is drained.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsSyncResponse {
    #[serde(default)]
    pub added: Vec<Transaction>,
    #[serde(default)]
    pub modified: Vec<Transaction>,
    #[serde(default)]
    pub removed: Vec<RemovedTransaction>,
    pub next_cursor: String,
    pub has_more: bool,
    pub request_id: String,
}

/// Error body attached to non-2xx Plaid responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error_type: String,
    pub error_code: String,
    pub error_message: String,
    pub display_message: Option<String>,
    pub request_id: Option<String>,
}
