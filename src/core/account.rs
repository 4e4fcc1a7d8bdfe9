use plaid_api::model;
use serde::{Deserialize, Serialize};

/// Canonical account snapshot, replaced wholesale on every successful poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub mask: Option<String>,
    pub balances: Balances,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    pub available: Option<f64>,
    pub current: Option<f64>,
    pub limit: Option<f64>,
    pub currency: Option<String>,
}

impl From<model::Account> for Account {
    fn from(model: model::Account) -> Self {
        Self {
            id: model.account_id,
            name: model.name,
            mask: model.mask,
            balances: Balances {
                available: model.balances.available,
                current: model.balances.current,
                limit: model.balances.limit,
                currency: model.balances.iso_currency_code,
            },
        }
    }
}
