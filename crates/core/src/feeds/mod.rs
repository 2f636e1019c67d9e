//! Sales, expense, and invoice feeds.
//!
//! Flat record lists that feed the profit and loss statement and the
//! receivables summary. They are not linked to the chart of accounts.

pub mod types;

pub use types::{Expense, ExpenseStatus, Invoice, InvoiceStatus, Sale, SaleStatus};
