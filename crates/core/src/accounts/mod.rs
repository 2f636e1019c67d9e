//! Chart of accounts.
//!
//! A flat list of ledger accounts with a unique code per account.
//! Balances are standalone figures; nothing here posts journal entries.

pub mod chart;
pub mod error;
pub mod types;


pub use chart::ChartOfAccounts;
pub use error::AccountError;
pub use types::{AccountStatus, AccountSubtype, AccountType, AccountUpdate, GlAccount, NewAccount};
