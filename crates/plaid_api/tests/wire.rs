use chrono::NaiveDate;

use plaid_api::model::{
    AccountsBalanceGetResponse, TransactionCode, TransactionsSyncRequest, TransactionsSyncResponse,
};

#[test]
fn deserializes_account_balances() {
    let body = r#"{
        "accounts": [
            {
                "account_id": "blgvvBlXw3cq5GMPwqB6s6q4dLKB9WcVqGDGo",
                "name": "Plaid Checking",
                "official_name": "Plaid Gold Standard 0% Interest Checking",
                "mask": "0000",
                "type": "depository",
                "subtype": "checking",
                "balances": {
                    "available": 100.0,
                    "current": 110.0,
                    "limit": null,
                    "iso_currency_code": "USD",
                    "unofficial_currency_code": null
                }
            },
            {
                "account_id": "6PdjjRP6LmugpBy5NgQvUqpRXMWxzktg3rwrk",
                "name": "Plaid Credit Card",
                "official_name": "Plaid Diamond 12.5% APR Interest Credit Card",
                "mask": "3333",
                "type": "credit",
                "subtype": "credit card",
                "balances": {
                    "available": null,
                    "current": 410.0,
                    "limit": 2000.0,
                    "iso_currency_code": "USD",
                    "unofficial_currency_code": null
                }
            }
        ],
        "request_id": "45QSn"
    }"#;

    let response: AccountsBalanceGetResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.accounts.len(), 2);
    assert_eq!(response.accounts[0].mask.as_deref(), Some("0000"));
    assert_eq!(response.accounts[0].balances.available, Some(100.0));
    assert_eq!(response.accounts[1].balances.available, None);
    assert_eq!(response.accounts[1].balances.limit, Some(2000.0));
    assert_eq!(
        response.accounts[1].balances.iso_currency_code.as_deref(),
        Some("USD")
    );
}

#[test]
fn deserializes_sync_page() {
    let body = r#"{
        "added": [
            {
                "transaction_id": "lPNjeW1nR6CDn5okmGQ6hEpMo4lLNoSrzqDje",
                "account_id": "BxBXxLj1m4HMXBm9WZZmCWVbPjX16EHwv99vp",
                "amount": 72.1,
                "iso_currency_code": "USD",
                "name": "Uber 063015 SF**POOL**",
                "merchant_name": "Uber",
                "date": "2023-09-28",
                "datetime": "2023-09-28T15:10:00Z",
                "pending": false,
                "transaction_code": "bank charge"
            },
            {
                "transaction_id": "NykPRkqk51Hmvr1oqy63hgk6wW7V1Vc6QpY5x",
                "account_id": "BxBXxLj1m4HMXBm9WZZmCWVbPjX16EHwv99vp",
                "amount": 5.4,
                "iso_currency_code": "USD",
                "name": "SparkFun",
                "merchant_name": null,
                "date": "2023-09-27",
                "datetime": null,
                "pending": true,
                "transaction_code": null
            }
        ],
        "modified": [],
        "removed": [
            {
                "transaction_id": "CmdQTNgems8BT1B7ibkoUXVPyAeehT3Tmzk0l",
                "account_id": "BxBXxLj1m4HMXBm9WZZmCWVbPjX16EHwv99vp"
            }
        ],
        "next_cursor": "tVUUL15lYQN5rBnfDIc1I8xudpGdIlw9nsgeXWvhOfkECvUeR663i3Dt1uf/94S8ASkitgLcIiOSqNwzzp+bh89kirazha5vuZHBb2ZA5NtCDkkV",
        "has_more": false,
        "request_id": "Wvhy9PZHQLV8njG"
    }"#;

    let page: TransactionsSyncResponse = serde_json::from_str(body).unwrap();

    assert_eq!(page.added.len(), 2);
    assert_eq!(page.modified.len(), 0);
    assert_eq!(page.removed.len(), 1);
    assert!(!page.has_more);

    let first = &page.added[0];
    assert_eq!(first.transaction_code, Some(TransactionCode::BankCharge));
    assert_eq!(
        first.date,
        NaiveDate::from_ymd_opt(2023, 9, 28).unwrap()
    );
    assert!(first.datetime.is_some());

    let second = &page.added[1];
    assert_eq!(second.transaction_code, None);
    assert!(second.datetime.is_none());
    assert!(second.pending);
}

#[test]
fn sync_request_omits_absent_cursor() {
    let request = TransactionsSyncRequest {
        access_token: "access-sandbox-1234".to_string(),
        cursor: None,
        count: Some(500),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("cursor").is_none());
    assert_eq!(value["count"], 500);
}

#[test]
fn sync_request_carries_resume_cursor() {
    let request = TransactionsSyncRequest {
        access_token: "access-sandbox-1234".to_string(),
        cursor: Some("last-cursor".to_string()),
        count: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["cursor"], "last-cursor");
    assert!(value.get("count").is_none());
}
