//! Report generation service.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::policy::{CostClass, CostPolicy, StatementAssumptions};
use super::types::{
    BalanceSheetSection, BalanceSheetSnapshot, CategoryTotal, CostClassTotal,
    FinancialStatements, ProfitLossSnapshot, ReceivablesSummary,
};
use crate::accounts::{AccountSubtype, AccountType, GlAccount};
use crate::feeds::{Expense, Invoice, InvoiceStatus, Sale};
use crate::workbook::Workbook;

/// Service for generating financial statements.
pub struct ReportService;

impl ReportService {
    /// Generates a balance sheet from the chart of accounts.
    ///
    /// Retained earnings are back-solved so that
    /// Assets = Liabilities + Equity holds by construction.
    #[must_use]
    pub fn generate_balance_sheet(
        accounts: &[GlAccount],
        assumptions: &StatementAssumptions,
    ) -> BalanceSheetSnapshot {
        let mut current_assets = BalanceSheetSection::default();
        let mut fixed_assets = BalanceSheetSection::default();
        let mut unclassified_assets = BalanceSheetSection::default();
        let mut current_liabilities = BalanceSheetSection::default();
        let mut long_term_liabilities = BalanceSheetSection::default();
        let mut unclassified_liabilities = BalanceSheetSection::default();
        let mut equity = BalanceSheetSection::default();

        for account in accounts {
            match account.account_type {
                AccountType::Asset if account.subtype.is_current_asset() => {
                    current_assets.push(account);
                }
                AccountType::Asset if account.subtype == AccountSubtype::FixedAsset => {
                    fixed_assets.push(account);
                }
                AccountType::Asset => {
                    warn!(code = %account.code, subtype = %account.subtype, "Unclassified asset account");
                    unclassified_assets.push(account);
                }
                AccountType::Liability if account.subtype.is_current_liability() => {
                    current_liabilities.push(account);
                }
                AccountType::Liability if account.subtype == AccountSubtype::LongTermLiability => {
                    long_term_liabilities.push(account);
                }
                AccountType::Liability => {
                    warn!(code = %account.code, subtype = %account.subtype, "Unclassified liability account");
                    unclassified_liabilities.push(account);
                }
                AccountType::Equity => equity.push(account),
                AccountType::Revenue | AccountType::Expense => {}
            }
        }

        let total_current_assets = current_assets.total;
        let total_fixed_assets = fixed_assets.total;
        let total_unclassified_assets = unclassified_assets.total;
        let total_assets = total_current_assets + total_fixed_assets + total_unclassified_assets;

        let total_current_liabilities = current_liabilities.total;
        let total_long_term_liabilities = long_term_liabilities.total;
        let total_unclassified_liabilities = unclassified_liabilities.total;
        let total_liabilities =
            total_current_liabilities + total_long_term_liabilities + total_unclassified_liabilities;

        let total_equity_stated = equity.total;
        let calculated_retained_earnings = total_assets - total_liabilities - total_equity_stated;
        let total_equity = total_equity_stated + calculated_retained_earnings;
        let total_liab_and_equity = total_liabilities + total_equity;
        let is_balanced =
            (total_assets - total_liab_and_equity).abs() < assumptions.balance_tolerance;

        debug!(
            accounts = accounts.len(),
            total_assets = %total_assets,
            retained_earnings = %calculated_retained_earnings,
            "Balance sheet derived"
        );

        BalanceSheetSnapshot {
            current_assets,
            fixed_assets,
            unclassified_assets,
            current_liabilities,
            long_term_liabilities,
            unclassified_liabilities,
            equity,
            total_current_assets,
            total_fixed_assets,
            total_unclassified_assets,
            total_assets,
            total_current_liabilities,
            total_long_term_liabilities,
            total_unclassified_liabilities,
            total_liabilities,
            total_equity_stated,
            calculated_retained_earnings,
            total_equity,
            total_liab_and_equity,
            is_balanced,
            current_ratio: safe_divide(total_current_assets, total_current_liabilities),
            quick_ratio: safe_divide(
                total_current_assets * assumptions.quick_ratio_factor,
                total_current_liabilities,
            ),
            debt_to_equity: safe_divide(total_liabilities, total_equity),
            working_capital: total_current_assets - total_current_liabilities,
        }
    }

    /// Generates a profit and loss statement from the sales and expense feeds.
    ///
    /// Only completed sales count as revenue. Every expense counts as
    /// operating expense regardless of its status.
    #[must_use]
    pub fn generate_profit_and_loss<P: CostPolicy + ?Sized>(
        sales: &[Sale],
        expenses: &[Expense],
        policy: &P,
        assumptions: &StatementAssumptions,
    ) -> ProfitLossSnapshot {
        let mut total_revenue = Decimal::ZERO;
        let mut total_cogs = Decimal::ZERO;
        let mut cogs_by_class: Vec<CostClassTotal> = Vec::new();

        for sale in sales.iter().filter(|s| s.is_completed()) {
            let class = policy.classify(sale);
            let cost = sale.amount * policy.cost_rate(class);
            total_revenue += sale.amount;
            total_cogs += cost;
            add_to_class(&mut cogs_by_class, class, sale.amount, cost);
        }

        let gross_profit = total_revenue - total_cogs;

        let total_opex: Decimal = expenses.iter().map(|e| e.amount).sum();
        let opex_by_category = group_by_category(expenses, total_opex);

        let operating_income = gross_profit - total_opex;
        let interest_expense = assumptions.interest_expense;
        let taxable = (operating_income - interest_expense).max(Decimal::ZERO);
        let taxes = taxable * assumptions.tax_rate;
        let net_income = operating_income - interest_expense - taxes;

        debug!(
            sales = sales.len(),
            expenses = expenses.len(),
            revenue = %total_revenue,
            net_income = %net_income,
            "Profit and loss derived"
        );

        ProfitLossSnapshot {
            total_revenue,
            total_cogs,
            cogs_by_class,
            gross_profit,
            gross_margin: percent_of(gross_profit, total_revenue),
            total_opex,
            opex_by_category,
            operating_income,
            operating_margin: percent_of(operating_income, total_revenue),
            interest_expense,
            taxes,
            net_income,
            net_margin: percent_of(net_income, total_revenue),
        }
    }

    /// Summarises the invoice feed by status.
    #[must_use]
    pub fn generate_receivables_summary(invoices: &[Invoice]) -> ReceivablesSummary {
        let mut summary = ReceivablesSummary::default();

        for invoice in invoices {
            summary.total_invoiced += invoice.amount;
            match invoice.status {
                InvoiceStatus::Paid => {
                    summary.paid += invoice.amount;
                    summary.paid_count += 1;
                }
                InvoiceStatus::Pending => {
                    summary.outstanding += invoice.amount;
                    summary.pending_count += 1;
                }
                InvoiceStatus::Overdue => {
                    summary.outstanding += invoice.amount;
                    summary.overdue += invoice.amount;
                    summary.overdue_count += 1;
                }
                InvoiceStatus::Draft => {
                    summary.draft += invoice.amount;
                    summary.draft_count += 1;
                }
            }
        }

        summary
    }

    /// Derives every statement from a workbook.
    #[must_use]
    pub fn generate_statements<P: CostPolicy + ?Sized>(
        workbook: &Workbook,
        policy: &P,
        assumptions: &StatementAssumptions,
    ) -> FinancialStatements {
        FinancialStatements {
            currency: workbook.currency.unwrap_or_default(),
            balance_sheet: Self::generate_balance_sheet(&workbook.accounts, assumptions),
            profit_and_loss: Self::generate_profit_and_loss(
                &workbook.sales,
                &workbook.expenses,
                policy,
                assumptions,
            ),
            receivables: Self::generate_receivables_summary(&workbook.invoices),
        }
    }
}

/// Divides, returning zero for a zero denominator or an overflowing quotient.
fn safe_divide(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// `part / whole × 100`, zero when `whole` is zero or the result overflows.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

fn add_to_class(totals: &mut Vec<CostClassTotal>, class: CostClass, revenue: Decimal, cost: Decimal) {
    match totals.iter_mut().find(|t| t.class == class) {
        Some(total) => {
            total.revenue += revenue;
            total.cost += cost;
        }
        None => totals.push(CostClassTotal {
            class,
            revenue,
            cost,
        }),
    }
}

fn group_by_category(expenses: &[Expense], total: Decimal) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match groups.iter_mut().find(|g| g.category == expense.category) {
            Some(group) => group.amount += expense.amount,
            None => groups.push(CategoryTotal {
                category: expense.category.clone(),
                amount: expense.amount,
                percent: Decimal::ZERO,
            }),
        }
    }

    // Stable sort: equal amounts keep first-seen order.
    groups.sort_by(|a, b| b.amount.cmp(&a.amount));
    for group in &mut groups {
        group.percent = percent_of(group.amount, total);
    }
    groups
}
