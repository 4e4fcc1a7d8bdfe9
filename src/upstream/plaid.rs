use async_trait::async_trait;
use plaid_api::{Error, PlaidApi};
use tracing::debug;

use crate::core::{Account, Transaction};
use crate::upstream::{AccountSource, SyncBatch, TransactionSource};

/// Adapts the wire-level Plaid client to the canonical source traits.
pub struct Source<'a, C> {
    client: &'a C,
    access_token: String,
}

impl<'a, C> Source<'a, C> {
    pub fn new(client: &'a C, access_token: String) -> Self {
        Self {
            client,
            access_token,
        }
    }
}

#[async_trait]
impl<'a, C: PlaidApi> AccountSource for Source<'a, C> {
    async fn accounts(&self) -> Result<Vec<Account>, Error> {
        let accounts = self.client.accounts_balance(&self.access_token).await?;

        Ok(accounts.into_iter().map(Account::from).collect())
    }
}

#[async_trait]
impl<'a, C: PlaidApi> TransactionSource for Source<'a, C> {
    async fn sync(&self, cursor: Option<&str>) -> Result<SyncBatch, Error> {
        let mut added = vec![];
        let mut request_cursor = cursor.map(ToOwned::to_owned);

        let next_cursor = loop {
            let page = self
                .client
                .transactions_sync(&self.access_token, request_cursor.as_deref())
                .await?;

            debug!(
                added = page.added.len(),
                modified = page.modified.len(),
                removed = page.removed.len(),
                has_more = page.has_more,
                "fetched sync page"
            );
            added.extend(page.added.into_iter().map(Transaction::from));

            if !page.has_more {
                break page.next_cursor;
            }

            request_cursor = Some(page.next_cursor);
        };

        Ok(SyncBatch { added, next_cursor })
    }
}
