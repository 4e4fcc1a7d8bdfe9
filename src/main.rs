mod core;
mod display;
mod event;
mod poller;
mod sensor;
mod settings;
mod upstream;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{arg, Command};
use plaid_api::{Client, Credentials};
use tracing::{debug, info, warn};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::core::window;
use crate::event::TransactionEventEntity;
use crate::poller::{PollOutcome, Poller, TransactionObserver};
use crate::sensor::AccountSensor;
use crate::settings::Settings;
use crate::upstream::{plaid::Source, AccountSource, TransactionSource};

static CLIENT_NAME: &str = "plaidwatch";

/// How often the watch loop wakes to consider a poll; the poller's own
/// interval guard decides whether upstream is actually hit.
const POLL_TICK: Duration = Duration::from_secs(60);

fn default_plaid_client(conf: &Settings) -> Client {
    Client::new(
        Credentials {
            client_id: conf.plaid.client_id.clone(),
            secret: conf.plaid.secret.clone(),
        },
        conf.plaid.env,
    )
}

async fn accounts(conf: Settings) -> Result<()> {
    let client = default_plaid_client(&conf);
    let source = Source::new(&client, conf.plaid.access_token.clone());

    let accounts = source
        .accounts()
        .await
        .context("failed to fetch account balances")?;
    display::print_accounts(std::io::stdout(), &accounts)?;

    Ok(())
}

async fn transactions(conf: Settings) -> Result<()> {
    let client = default_plaid_client(&conf);
    let source = Source::new(&client, conf.plaid.access_token.clone());

    let accounts = source
        .accounts()
        .await
        .context("failed to fetch account balances")?;
    let batch = source
        .sync(None)
        .await
        .context("failed to sync transactions")?;

    for account in &accounts {
        let recent = window::merge(&[], &batch.added, &account.id);
        display::print_window(std::io::stdout(), account, &recent)?;
        println!();
    }

    Ok(())
}

async fn watch(conf: Settings) -> Result<()> {
    let client = default_plaid_client(&conf);
    let source = Source::new(&client, conf.plaid.access_token.clone());

    let accounts = source
        .accounts()
        .await
        .context("failed to fetch account balances")?;

    let mut sensors: Vec<AccountSensor> = accounts.iter().map(AccountSensor::new).collect();
    let events: Vec<Arc<TransactionEventEntity>> = accounts
        .iter()
        .map(|account| Arc::new(TransactionEventEntity::new(account)))
        .collect();
    let observers: Vec<Arc<dyn TransactionObserver>> = events
        .iter()
        .map(|entity| entity.clone() as Arc<dyn TransactionObserver>)
        .collect();

    let min_interval = Duration::from_secs(conf.poll_interval_minutes * 60);
    let mut poller = Poller::new(source)
        .with_min_interval(min_interval)
        .with_observers(observers);

    info!(
        instance = conf.name.as_deref().unwrap_or(CLIENT_NAME),
        accounts = accounts.len(),
        interval_minutes = conf.poll_interval_minutes,
        event_types = ?event::event_types(),
        "watching"
    );

    loop {
        match poller.poll().await {
            PollOutcome::Refreshed => {
                for sensor in &mut sensors {
                    sensor.refresh(poller.accounts(), poller.transactions());
                    info!(
                        sensor = %sensor.name(),
                        id = %sensor.unique_id(),
                        state = ?sensor.state(),
                        unit = ?sensor.unit_of_measurement(),
                        window = sensor.transactions().len(),
                        "sensor refreshed"
                    );
                    debug!(attributes = %sensor.attributes(), "sensor attributes");
                }

                for entity in &events {
                    for event in entity.take_events() {
                        info!(
                            entity = %entity.name(),
                            id = %entity.entity_id(),
                            event_type = event.event_type,
                            amount = event.amount,
                            name = %event.name,
                            "transaction event"
                        );
                    }
                }

                debug!(
                    available = poller.available(),
                    cursor = ?poller.cursor(),
                    "poll cycle complete"
                );
            }
            PollOutcome::Unavailable => {
                warn!("upstream unavailable, entities report stale data");
            }
            PollOutcome::Throttled => {}
        }

        tokio::select! {
            _ = tokio::time::sleep(POLL_TICK) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn run() -> Result<()> {
    let app = Command::new(CLIENT_NAME)
        .about("Polls Plaid account balances and transaction feeds and exposes \
         them as balance sensors and typed transaction events.")
        .version("0.1.0")
        .subcommand_required(true)
        .allow_external_subcommands(false)
        .arg(arg!(CONFIG: -c --config [FILE] "Sets a custom config file"))
        .arg(arg!(verbose: -v --verbose [Boolean] "Sets the level of verbosity"))
        .subcommand(Command::new("accounts")
            .about("Prints tracked accounts and balances to stdout."))
        .subcommand(Command::new("transactions")
            .about("Performs a one-shot transaction sync and prints each account's ten most recent transactions."))
        .subcommand(Command::new("watch")
            .about("Polls on a fixed interval, refreshing balance sensors and raising transaction events."));

    if app.clone().get_matches().value_of("verbose") == Some("true") {
        tracing_subscriber::registry()
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let matches = app.get_matches();
    let conf = Settings::new(matches.value_of("CONFIG"))?;

    match matches.subcommand() {
        Some(("accounts", _)) => accounts(conf).await?,
        Some(("transactions", _)) => transactions(conf).await?,
        Some(("watch", _)) => watch(conf).await?,
        None => unreachable!("subcommand is required"),
        _ => unreachable!(),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        println!("{}", err);
        std::process::exit(1);
    }
}
