use config::{Config, Environment, File};
use serde::Deserialize;

use crate::CLIENT_NAME;

const CONFIG_NAME: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Optional display name for this instance, used in log output.
    pub name: Option<String>,
    pub poll_interval_minutes: u64,
    pub plaid: Plaid,
}

#[derive(Debug, Deserialize)]
pub struct Plaid {
    pub client_id: String,
    pub secret: String,
    pub access_token: String,
    pub env: plaid_api::Environment,
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut s = Config::builder()
            .set_default("poll_interval_minutes", 30_i64)?
            .add_source(Environment::with_prefix("PLAIDWATCH"));

        if let Some(path) = config_path {
            s = s.add_source(File::with_name(path));
        } else {
            s = s.add_source(File::with_name(&default_config_path()));
        }

        s.build()?.try_deserialize()
    }
}

pub(crate) fn default_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| std::env::current_dir().expect("read current working dir"))
        .join(CLIENT_NAME)
        .join(CONFIG_NAME)
        .display()
        .to_string()
}
