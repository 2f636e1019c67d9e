//! Report error types.

use ledgerdesk_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when statement assumptions are out of range.
///
/// The derivations themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A rate must lie in [0, 1].
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange {
        /// Assumption name.
        name: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// An amount must not be negative.
    #[error("{name} cannot be negative, got {value}")]
    NegativeAssumption {
        /// Assumption name.
        name: &'static str,
        /// Offending value.
        value: Decimal,
    },
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
