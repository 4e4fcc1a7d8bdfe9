use std::io::Write;

use anyhow::Result;
use tabwriter::TabWriter;

use crate::core::{Account, Transaction};

fn amount(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

pub fn print_accounts<T: Write>(wr: T, accounts: &[Account]) -> Result<()> {
    let mut tw = TabWriter::new(wr);
    writeln!(tw, "Account\tMask\tAvailable\tCurrent\tLimit\tCurrency")?;

    for account in accounts {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}\t{}",
            account.name,
            account.mask.as_deref().unwrap_or("-"),
            amount(account.balances.available),
            amount(account.balances.current),
            amount(account.balances.limit),
            account.balances.currency.as_deref().unwrap_or("-"),
        )?;
    }

    tw.flush()?;

    Ok(())
}

pub fn print_window<T: Write>(wr: T, account: &Account, window: &[Transaction]) -> Result<()> {
    let mut tw = TabWriter::new(wr);
    writeln!(
        tw,
        "{} ({})",
        account.name,
        account.mask.as_deref().unwrap_or("-")
    )?;
    writeln!(tw, "Date\tName\tAmount\tCurrency\tPending\tCode")?;

    for tx in window {
        writeln!(
            tw,
            "{}\t{}\t{:.2}\t{}\t{}\t{}",
            tx.timestamp.format("%Y-%m-%d %H:%M"),
            tx.name,
            tx.amount,
            tx.currency.as_deref().unwrap_or("-"),
            tx.pending,
            tx.code.map_or("-", |code| code.as_str()),
        )?;
    }

    tw.flush()?;

    Ok(())
}
