//! Workbook: the chart of accounts and feeds bundled as one JSON document.

pub mod error;

#[cfg(test)]
mod tests;

use ledgerdesk_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accounts::{ChartOfAccounts, GlAccount};
use crate::feeds::{Expense, Invoice, Sale};

pub use error::WorkbookError;

/// Every input the statements are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// Reporting currency; `None` when the document does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Chart of accounts.
    #[serde(default)]
    pub accounts: Vec<GlAccount>,
    /// Sales feed.
    #[serde(default)]
    pub sales: Vec<Sale>,
    /// Expense feed.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Invoice feed.
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

impl Workbook {
    /// Parses and validates a workbook from JSON.
    pub fn from_json(json: &str) -> Result<Self, WorkbookError> {
        let workbook: Self = serde_json::from_str(json)?;
        workbook.validate()?;
        debug!(
            accounts = workbook.accounts.len(),
            sales = workbook.sales.len(),
            expenses = workbook.expenses.len(),
            invoices = workbook.invoices.len(),
            "Workbook loaded"
        );
        Ok(workbook)
    }

    /// Checks code uniqueness, non-negative amounts, and invoice dates.
    pub fn validate(&self) -> Result<(), WorkbookError> {
        ChartOfAccounts::from_accounts(self.accounts.clone())?;

        for sale in &self.sales {
            check_amount("Sale", &sale.id, sale.amount)?;
        }
        for expense in &self.expenses {
            check_amount("Expense", &expense.id, expense.amount)?;
        }
        for invoice in &self.invoices {
            check_amount("Invoice", &invoice.id, invoice.amount)?;
            if invoice.due_date < invoice.issue_date {
                return Err(WorkbookError::DueBeforeIssue {
                    id: invoice.id.to_string(),
                    issued: invoice.issue_date,
                    due: invoice.due_date,
                });
            }
        }
        Ok(())
    }

    /// Fills in the reporting currency when the document did not name one.
    #[must_use]
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.currency.get_or_insert(currency);
        self
    }

    /// Builds a chart of accounts store from the workbook's accounts.
    pub fn chart(&self) -> Result<ChartOfAccounts, WorkbookError> {
        Ok(ChartOfAccounts::from_accounts(self.accounts.clone())?)
    }
}

fn check_amount(
    record: &'static str,
    id: &impl std::fmt::Display,
    amount: Decimal,
) -> Result<(), WorkbookError> {
    if amount < Decimal::ZERO {
        return Err(WorkbookError::NegativeAmount {
            record,
            id: id.to_string(),
            amount,
        });
    }
    Ok(())
}
