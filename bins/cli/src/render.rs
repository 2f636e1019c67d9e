//! Plain-text rendering of the derived statements.

use std::fmt::{self, Formatter};

use ledgerdesk_core::{
    ChartOfAccounts,
    reports::{
        BalanceSheetSection, BalanceSheetSnapshot, CostClass, FinancialStatements,
        ProfitLossSnapshot, ReceivablesSummary,
    },
};
use ledgerdesk_shared::types::{Currency, Money};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 36;
const AMOUNT_WIDTH: usize = 18;

/// Text report over every statement.
pub struct Report<'a> {
    statements: &'a FinancialStatements,
    chart: &'a ChartOfAccounts,
}

impl<'a> Report<'a> {
    /// Creates a report over derived statements and the chart they came from.
    pub fn new(statements: &'a FinancialStatements, chart: &'a ChartOfAccounts) -> Self {
        Self { statements, chart }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let currency = self.statements.currency;

        writeln!(
            f,
            "Chart of accounts: {} accounts ({} active)\n",
            self.chart.len(),
            self.chart.active().count()
        )?;
        balance_sheet(f, &self.statements.balance_sheet, currency)?;
        writeln!(f)?;
        profit_and_loss(f, &self.statements.profit_and_loss, currency)?;
        writeln!(f)?;
        receivables(f, &self.statements.receivables, currency)
    }
}

fn balance_sheet(f: &mut Formatter<'_>, sheet: &BalanceSheetSnapshot, currency: Currency) -> fmt::Result {
    heading(f, "BALANCE SHEET", currency)?;

    section(f, "Current assets", &sheet.current_assets, currency)?;
    section(f, "Fixed assets", &sheet.fixed_assets, currency)?;
    if !sheet.unclassified_assets.accounts.is_empty() {
        section(f, "Unclassified assets", &sheet.unclassified_assets, currency)?;
    }
    line(f, "Total assets", sheet.total_assets, currency)?;
    writeln!(f)?;

    section(f, "Current liabilities", &sheet.current_liabilities, currency)?;
    section(f, "Long-term liabilities", &sheet.long_term_liabilities, currency)?;
    if !sheet.unclassified_liabilities.accounts.is_empty() {
        section(f, "Unclassified liabilities", &sheet.unclassified_liabilities, currency)?;
    }
    line(f, "Total liabilities", sheet.total_liabilities, currency)?;
    writeln!(f)?;

    section(f, "Equity", &sheet.equity, currency)?;
    line(f, "Retained earnings (calculated)", sheet.calculated_retained_earnings, currency)?;
    line(f, "Total equity", sheet.total_equity, currency)?;
    line(f, "Total liabilities and equity", sheet.total_liab_and_equity, currency)?;
    let balanced = if sheet.is_balanced { "yes" } else { "NO" };
    writeln!(f, "{:<LABEL_WIDTH$}{balanced:>AMOUNT_WIDTH$}", "Balanced")?;
    writeln!(f)?;

    ratio(f, "Current ratio", sheet.current_ratio)?;
    ratio(f, "Quick ratio", sheet.quick_ratio)?;
    ratio(f, "Debt to equity", sheet.debt_to_equity)?;
    line(f, "Working capital", sheet.working_capital, currency)
}

fn profit_and_loss(f: &mut Formatter<'_>, pnl: &ProfitLossSnapshot, currency: Currency) -> fmt::Result {
    heading(f, "PROFIT AND LOSS", currency)?;

    line(f, "Revenue", pnl.total_revenue, currency)?;
    for class in &pnl.cogs_by_class {
        let label = match class.class {
            CostClass::Service => "  Cost of services",
            CostClass::Product => "  Cost of products",
        };
        line(f, label, class.cost, currency)?;
    }
    line(f, "Cost of goods sold", pnl.total_cogs, currency)?;
    line(f, "Gross profit", pnl.gross_profit, currency)?;
    percent(f, "Gross margin", pnl.gross_margin)?;
    writeln!(f)?;

    for category in &pnl.opex_by_category {
        line(f, &format!("  {}", category.category), category.amount, currency)?;
    }
    line(f, "Operating expenses", pnl.total_opex, currency)?;
    line(f, "Operating income (EBITDA)", pnl.operating_income, currency)?;
    percent(f, "Operating margin", pnl.operating_margin)?;
    line(f, "Interest expense", pnl.interest_expense, currency)?;
    line(f, "Taxes", pnl.taxes, currency)?;
    line(f, "Net income", pnl.net_income, currency)?;
    percent(f, "Net margin", pnl.net_margin)
}

fn receivables(f: &mut Formatter<'_>, summary: &ReceivablesSummary, currency: Currency) -> fmt::Result {
    heading(f, "RECEIVABLES", currency)?;

    line(f, "Total invoiced", summary.total_invoiced, currency)?;
    line(f, &format!("Paid ({})", summary.paid_count), summary.paid, currency)?;
    line(
        f,
        &format!("Outstanding ({})", summary.pending_count + summary.overdue_count),
        summary.outstanding,
        currency,
    )?;
    line(f, &format!("  Overdue ({})", summary.overdue_count), summary.overdue, currency)?;
    line(f, &format!("Draft ({})", summary.draft_count), summary.draft, currency)
}

fn heading(f: &mut Formatter<'_>, title: &str, currency: Currency) -> fmt::Result {
    writeln!(f, "{title} ({currency})")?;
    writeln!(f, "{}", "=".repeat(LABEL_WIDTH + AMOUNT_WIDTH))
}

fn section(
    f: &mut Formatter<'_>,
    title: &str,
    section: &BalanceSheetSection,
    currency: Currency,
) -> fmt::Result {
    for account in &section.accounts {
        line(
            f,
            &format!("  {} {}", account.code, account.name),
            account.balance,
            currency,
        )?;
    }
    line(f, title, section.total, currency)
}

fn line(f: &mut Formatter<'_>, label: &str, amount: Decimal, currency: Currency) -> fmt::Result {
    let amount = Money::new(amount, currency).to_string();
    writeln!(f, "{label:<LABEL_WIDTH$}{amount:>AMOUNT_WIDTH$}")
}

fn ratio(f: &mut Formatter<'_>, label: &str, value: Decimal) -> fmt::Result {
    let value = value.round_dp(2).to_string();
    writeln!(f, "{label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}")
}

fn percent(f: &mut Formatter<'_>, label: &str, value: Decimal) -> fmt::Result {
    let value = format!("{}%", value.round_dp(1));
    writeln!(f, "{label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}")
}
