//! Workbook error types.

use chrono::NaiveDate;
use ledgerdesk_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::accounts::AccountError;

/// Errors raised while loading or validating a workbook.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The JSON document is malformed.
    #[error("Invalid workbook JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The chart of accounts breaks an invariant.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// A feed record carries a negative amount.
    #[error("{record} {id} has a negative amount: {amount}")]
    NegativeAmount {
        /// Record kind ("Sale", "Expense", "Invoice").
        record: &'static str,
        /// Record ID.
        id: String,
        /// Offending amount.
        amount: Decimal,
    },

    /// An invoice falls due before it was issued.
    #[error("Invoice {id} is due {due} before its issue date {issued}")]
    DueBeforeIssue {
        /// Invoice ID.
        id: String,
        /// Issue date.
        issued: NaiveDate,
        /// Due date.
        due: NaiveDate,
    },
}

impl From<WorkbookError> for AppError {
    fn from(err: WorkbookError) -> Self {
        match err {
            WorkbookError::Parse(_) => Self::Parse(err.to_string()),
            WorkbookError::Account(inner) => inner.into(),
            WorkbookError::NegativeAmount { .. } | WorkbookError::DueBeforeIssue { .. } => {
                Self::Validation(err.to_string())
            }
        }
    }
}
