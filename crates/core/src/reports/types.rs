//! Report data types.
//!
//! Every snapshot is a pure function of its inputs: recomputed on demand,
//! never mutated, never persisted.

use ledgerdesk_shared::types::{AccountId, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::CostClass;
use crate::accounts::{AccountSubtype, GlAccount};

/// Account line shown inside a balance sheet section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLine {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account subtype.
    pub subtype: AccountSubtype,
    /// Raw balance.
    pub balance: Decimal,
}

impl From<&GlAccount> for AccountLine {
    fn from(account: &GlAccount) -> Self {
        Self {
            account_id: account.id,
            code: account.code.clone(),
            name: account.name.clone(),
            subtype: account.subtype.clone(),
            balance: account.balance,
        }
    }
}

/// Balance sheet subsection (current assets, fixed assets, etc.).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Section total.
    pub total: Decimal,
    /// Accounts in this section.
    pub accounts: Vec<AccountLine>,
}

impl BalanceSheetSection {
    pub(crate) fn push(&mut self, account: &GlAccount) {
        self.total += account.balance;
        self.accounts.push(AccountLine::from(account));
    }
}

/// Balance sheet derived from the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSnapshot {
    /// Current asset accounts.
    pub current_assets: BalanceSheetSection,
    /// Fixed asset accounts.
    pub fixed_assets: BalanceSheetSection,
    /// Asset accounts whose subtype has no bucket.
    pub unclassified_assets: BalanceSheetSection,
    /// Current liability accounts.
    pub current_liabilities: BalanceSheetSection,
    /// Long-term liability accounts.
    pub long_term_liabilities: BalanceSheetSection,
    /// Liability accounts whose subtype has no bucket.
    pub unclassified_liabilities: BalanceSheetSection,
    /// Equity accounts.
    pub equity: BalanceSheetSection,

    /// Total current assets.
    pub total_current_assets: Decimal,
    /// Total fixed assets.
    pub total_fixed_assets: Decimal,
    /// Total unclassified assets.
    pub total_unclassified_assets: Decimal,
    /// Total assets, all three asset buckets.
    pub total_assets: Decimal,
    /// Total current liabilities.
    pub total_current_liabilities: Decimal,
    /// Total long-term liabilities.
    pub total_long_term_liabilities: Decimal,
    /// Total unclassified liabilities.
    pub total_unclassified_liabilities: Decimal,
    /// Total liabilities, all three liability buckets.
    pub total_liabilities: Decimal,
    /// Sum of equity account balances as recorded.
    pub total_equity_stated: Decimal,
    /// Plug that makes the sheet balance: assets - liabilities - stated equity.
    pub calculated_retained_earnings: Decimal,
    /// Stated equity plus the retained earnings plug.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub total_liab_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity within tolerance.
    pub is_balanced: bool,

    /// Current assets / current liabilities.
    pub current_ratio: Decimal,
    /// Liquid share of current assets / current liabilities.
    pub quick_ratio: Decimal,
    /// Total liabilities / total equity.
    pub debt_to_equity: Decimal,
    /// Current assets - current liabilities.
    pub working_capital: Decimal,
}

/// Amount grouped under a label, with its share of the group total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label.
    pub category: String,
    /// Summed amount.
    pub amount: Decimal,
    /// Percentage of the group total.
    pub percent: Decimal,
}

/// Revenue and simulated cost for one cost bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostClassTotal {
    /// Cost bucket.
    pub class: CostClass,
    /// Completed-sale revenue in the bucket.
    pub revenue: Decimal,
    /// Simulated cost in the bucket.
    pub cost: Decimal,
}

/// Profit and loss statement derived from the sales and expense feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossSnapshot {
    /// Sum of completed sales.
    pub total_revenue: Decimal,
    /// Simulated cost of goods sold.
    pub total_cogs: Decimal,
    /// COGS split by cost bucket, in first-seen order.
    pub cogs_by_class: Vec<CostClassTotal>,
    /// Revenue - COGS.
    pub gross_profit: Decimal,
    /// Gross profit as a percentage of revenue.
    pub gross_margin: Decimal,
    /// Sum of all expenses.
    pub total_opex: Decimal,
    /// Expenses grouped by category, largest first.
    pub opex_by_category: Vec<CategoryTotal>,
    /// Gross profit - operating expenses.
    ///
    /// Dashboards label this EBITDA, but no depreciation or amortisation is
    /// ever deducted.
    pub operating_income: Decimal,
    /// Operating income as a percentage of revenue.
    pub operating_margin: Decimal,
    /// Assumed interest expense.
    pub interest_expense: Decimal,
    /// Tax on positive pre-tax income.
    pub taxes: Decimal,
    /// Operating income - interest - taxes.
    pub net_income: Decimal,
    /// Net income as a percentage of revenue.
    pub net_margin: Decimal,
}

/// Receivables position derived from the invoice feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivablesSummary {
    /// Sum of every invoice.
    pub total_invoiced: Decimal,
    /// Paid invoices.
    pub paid: Decimal,
    /// Pending plus overdue invoices.
    pub outstanding: Decimal,
    /// Overdue invoices.
    pub overdue: Decimal,
    /// Draft invoices.
    pub draft: Decimal,
    /// Number of paid invoices.
    pub paid_count: usize,
    /// Number of pending invoices.
    pub pending_count: usize,
    /// Number of overdue invoices.
    pub overdue_count: usize,
    /// Number of draft invoices.
    pub draft_count: usize,
}

/// All statements derived from one workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Reporting currency.
    pub currency: Currency,
    /// Balance sheet.
    pub balance_sheet: BalanceSheetSnapshot,
    /// Profit and loss.
    pub profit_and_loss: ProfitLossSnapshot,
    /// Receivables.
    pub receivables: ReceivablesSummary,
}
