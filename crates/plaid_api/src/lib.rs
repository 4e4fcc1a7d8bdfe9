pub mod model;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

static PLAID_VERSION: &str = "2020-09-14";

const SYNC_PAGE_SIZE: u32 = 500;

/// Error codes Plaid uses for credential and consent failures.
const AUTH_ERROR_CODES: [&str; 3] = [
    "INVALID_API_KEYS",
    "INVALID_ACCESS_TOKEN",
    "ITEM_LOGIN_REQUIRED",
];

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid credentials: {0}")]
    Auth(String),
    #[error("plaid api error {error_type}/{error_code}: {message}")]
    Remote {
        error_type: String,
        error_code: String,
        message: String,
    },
    #[error("transport failure")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Sandbox,
    Development,
    Production,
}

impl Environment {
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox.plaid.com",
            Environment::Development => "https://development.plaid.com",
            Environment::Production => "https://production.plaid.com",
        }
    }
}

/// The two read-only calls the poller depends on. [`Client`] implements
/// this against the live Plaid hosts; tests substitute scripted pages.
#[async_trait]
pub trait PlaidApi: Send + Sync {
    async fn accounts_balance(&self, access_token: &str) -> Result<Vec<model::Account>, Error>;

    async fn transactions_sync(
        &self,
        access_token: &str,
        cursor: Option<&str>,
    ) -> Result<model::TransactionsSyncResponse, Error>;
}

pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    env: Environment,
}

impl Client {
    pub fn new(credentials: Credentials, env: Environment) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            env,
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self
            .http
            .post(format!("{}{}", self.env.host(), path))
            .header("PLAID-CLIENT-ID", &self.credentials.client_id)
            .header("PLAID-SECRET", &self.credentials.secret)
            .header("Plaid-Version", PLAID_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify(status, &body));
        }

        Ok(response.json().await?)
    }
}

fn classify(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<model::ApiError>(body) {
        Ok(err) if AUTH_ERROR_CODES.contains(&err.error_code.as_str()) => {
            Error::Auth(err.error_message)
        }
        Ok(err) => Error::Remote {
            error_type: err.error_type,
            error_code: err.error_code,
            message: err.error_message,
        },
        Err(_) if status == StatusCode::UNAUTHORIZED => Error::Auth(status.to_string()),
        Err(_) => Error::Remote {
            error_type: "HTTP_ERROR".to_string(),
            error_code: status.as_str().to_string(),
            message: body.to_string(),
        },
    }
}

#[async_trait]
impl PlaidApi for Client {
    async fn accounts_balance(&self, access_token: &str) -> Result<Vec<model::Account>, Error> {
        let request = model::AccountsBalanceGetRequest {
            access_token: access_token.to_string(),
        };
        let response: model::AccountsBalanceGetResponse =
            self.post("/accounts/balance/get", &request).await?;

        Ok(response.accounts)
    }

    async fn transactions_sync(
        &self,
        access_token: &str,
        cursor: Option<&str>,
    ) -> Result<model::TransactionsSyncResponse, Error> {
        let request = model::TransactionsSyncRequest {
            access_token: access_token.to_string(),
            cursor: cursor.map(ToOwned::to_owned),
            count: Some(SYNC_PAGE_SIZE),
        };

        self.post("/transactions/sync", &request).await
    }
}
