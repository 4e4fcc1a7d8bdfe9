mod account;
mod txn;
pub mod window;

pub use account::{Account, Balances};
pub use txn::Transaction;
