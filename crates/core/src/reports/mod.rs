//! Financial statement generation.
//!
//! This module provides pure business logic for deriving statements from the
//! chart of accounts and the transaction feeds:
//! - Balance Sheet (with retained-earnings plug and solvency ratios)
//! - Profit and Loss (with policy-driven cost of goods sold)
//! - Receivables Summary

pub mod error;
pub mod policy;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use policy::{CostClass, CostPolicy, KeywordCostPolicy, StatementAssumptions};
pub use service::ReportService;
pub use types::*;
