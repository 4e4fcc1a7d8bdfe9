pub mod plaid;

use async_trait::async_trait;

use plaid_api::Error;

use crate::core::{Account, Transaction};

/// One complete pass over the transaction feed: every transaction added
/// since the request cursor, plus the cursor to resume from next time.
#[derive(Debug, Clone)]
pub struct SyncBatch {
    pub added: Vec<Transaction>,
    pub next_cursor: String,
}

#[async_trait]
pub trait AccountSource {
    async fn accounts(&self) -> Result<Vec<Account>, Error>;
}

#[async_trait]
pub trait TransactionSource {
    /// Fetches all transaction pages since `cursor`. Fails atomically: an
    /// error on any page fails the whole call and surfaces no cursor.
    async fn sync(&self, cursor: Option<&str>) -> Result<SyncBatch, Error>;
}
