//! Core statement derivations for Ledgerdesk.
//!
//! This crate contains pure business logic with ZERO file system or network
//! dependencies. Inputs are plain data passed in by the caller; outputs are
//! immutable snapshots recomputed on demand.
//!
//! # Modules
//!
//! - `accounts` - Chart of accounts store
//! - `feeds` - Sales, expense, and invoice records
//! - `workbook` - JSON bundle of accounts and feeds
//! - `reports` - Balance sheet, profit and loss, and receivables derivations

pub mod accounts;
pub mod feeds;
pub mod reports;
pub mod workbook;

pub use accounts::{ChartOfAccounts, GlAccount};
pub use reports::{FinancialStatements, ReportService};
pub use workbook::Workbook;
