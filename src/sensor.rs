use serde_json::json;

use crate::core::{window, Account, Balances, Transaction};

static ATTRIBUTION: &str = "Data provided by Plaid";

/// Balance view over one account, looked up by mask, carrying the
/// account's recent-transaction window.
pub struct AccountSensor {
    account_id: String,
    mask: Option<String>,
    name: String,
    balances: Balances,
    transactions: Vec<Transaction>,
}

impl AccountSensor {
    pub fn new(account: &Account) -> Self {
        Self {
            account_id: account.id.clone(),
            mask: account.mask.clone(),
            name: account.name.clone(),
            balances: account.balances.clone(),
            transactions: vec![],
        }
    }

    pub fn name(&self) -> String {
        format!("{} Balance", self.name)
    }

    pub fn unique_id(&self) -> String {
        format!("plaid-{}", self.account_id)
    }

    /// Native value of the sensor: the available balance.
    pub fn state(&self) -> Option<f64> {
        self.balances.available
    }

    pub fn unit_of_measurement(&self) -> Option<&str> {
        self.balances.currency.as_deref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Re-resolves the account by mask against the latest snapshot and
    /// merges newly synced transactions into the recent window. A snapshot
    /// with no matching mask leaves the sensor at its stale values.
    pub fn refresh(&mut self, accounts: &[Account], incoming: &[Transaction]) {
        let Some(account) = accounts.iter().find(|a| a.mask == self.mask) else {
            return;
        };

        self.account_id = account.id.clone();
        self.name = account.name.clone();
        self.balances = account.balances.clone();
        self.transactions = window::merge(&self.transactions, incoming, &account.id);
    }

    pub fn attributes(&self) -> serde_json::Value {
        json!({
            "attribution": ATTRIBUTION,
            "current_balance": self.balances.current,
            "balance_limit": self.balances.limit,
            "mask": self.mask,
            "transactions": self.transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn account(current: f64) -> Account {
        Account {
            id: "acct-1".to_string(),
            name: "Checking".to_string(),
            mask: Some("0000".to_string()),
            balances: Balances {
                available: Some(current - 25.0),
                current: Some(current),
                limit: None,
                currency: Some("USD".to_string()),
            },
        }
    }

    fn txn(id: &str, seconds: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: "acct-1".to_string(),
            amount: 3.5,
            currency: Some("USD".to_string()),
            name: "Bagel".to_string(),
            merchant: None,
            timestamp: DateTime::from_timestamp(seconds, 0).unwrap(),
            pending: false,
            code: None,
        }
    }

    #[test]
    fn refresh_updates_balances_and_merges_window() {
        let mut sensor = AccountSensor::new(&account(100.0));
        assert_eq!(sensor.state(), Some(75.0));

        sensor.refresh(&[account(100.0)], &[txn("t1", 100)]);
        sensor.refresh(&[account(180.0)], &[txn("t1", 100), txn("t2", 200)]);

        assert_eq!(sensor.state(), Some(155.0));
        assert_eq!(sensor.transactions().len(), 2);
        assert_eq!(sensor.transactions()[0].id, "t2");
    }

    #[test]
    fn refresh_without_matching_mask_keeps_stale_values() {
        let mut sensor = AccountSensor::new(&account(100.0));

        let mut other = account(500.0);
        other.mask = Some("9999".to_string());
        sensor.refresh(&[other], &[txn("t1", 100)]);

        assert_eq!(sensor.state(), Some(75.0));
        assert!(sensor.transactions().is_empty());
    }

    #[test]
    fn attributes_expose_the_recent_window() {
        let mut sensor = AccountSensor::new(&account(100.0));
        sensor.refresh(&[account(100.0)], &[txn("t1", 100)]);

        let attributes = sensor.attributes();
        assert_eq!(attributes["mask"], "0000");
        assert_eq!(attributes["current_balance"], 100.0);
        assert_eq!(attributes["transactions"].as_array().unwrap().len(), 1);
    }
}
