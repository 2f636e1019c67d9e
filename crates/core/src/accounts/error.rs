//! Chart of accounts error types.

use ledgerdesk_shared::{AppError, types::AccountId};
use thiserror::Error;

/// Errors that can occur while editing the chart of accounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Another account already uses this code.
    #[error("Account code already in use: {0}")]
    DuplicateCode(String),

    /// Account code is blank.
    #[error("Account code cannot be empty")]
    EmptyCode,

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateCode(_) => Self::Conflict(err.to_string()),
            AccountError::EmptyCode => Self::Validation(err.to_string()),
            AccountError::AccountNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}
