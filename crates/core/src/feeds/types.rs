//! Feed record types.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{ExpenseId, InvoiceId, SaleId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sale status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    /// Delivered and paid; the only status that counts as revenue.
    Completed,
    /// Awaiting delivery or payment.
    Pending,
    /// Reversed after completion.
    Refunded,
}

/// A sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Sale ID.
    #[serde(default)]
    pub id: SaleId,
    /// Customer name.
    pub customer: String,
    /// Product or service name.
    pub product: String,
    /// Sale amount (non-negative).
    pub amount: Decimal,
    /// Sale date.
    pub date: NaiveDate,
    /// Sale status.
    pub status: SaleStatus,
}

impl Sale {
    /// Returns true if the sale counts as revenue.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SaleStatus::Completed
    }
}

/// Expense status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseStatus {
    /// Approved for payment.
    Approved,
    /// Submitted, not yet reviewed.
    Pending,
    /// Declined.
    Rejected,
}

/// An operating expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    #[serde(default)]
    pub id: ExpenseId,
    /// Free-text description.
    pub description: String,
    /// Grouping category (e.g. "Rent", "Software").
    pub category: String,
    /// Expense amount (non-negative).
    pub amount: Decimal,
    /// Expense date.
    pub date: NaiveDate,
    /// Expense status.
    pub status: ExpenseStatus,
}

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Settled.
    Paid,
    /// Issued, not yet due.
    Pending,
    /// Past due date and unpaid.
    Overdue,
    /// Not yet issued.
    Draft,
}

/// A customer invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    #[serde(default)]
    pub id: InvoiceId,
    /// Billed client.
    pub client: String,
    /// Invoice amount (non-negative).
    pub amount: Decimal,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
    /// Invoice status.
    pub status: InvoiceStatus,
}
