//! Tests for workbook loading and validation.

use rust_decimal_macros::dec;

use super::{Workbook, WorkbookError};
use crate::accounts::{AccountError, AccountSubtype};
use crate::reports::{KeywordCostPolicy, ReportService, StatementAssumptions};
use ledgerdesk_shared::{AppError, types::Currency};

const SAMPLE: &str = include_str!("../../../../data/workbook.json");

#[test]
fn test_minimal_workbook_defaults() {
    let workbook = Workbook::from_json("{}").unwrap();

    assert_eq!(workbook.currency, None);
    assert!(workbook.accounts.is_empty());
    assert!(workbook.sales.is_empty());
}

#[test]
fn test_parse_feeds() {
    let json = r#"{
        "currency": "EUR",
        "accounts": [
            { "code": "1000", "name": "Operating", "type": "Asset", "subtype": "Bank", "balance": "1000" },
            { "code": "1900", "name": "Goodwill", "type": "Asset", "subtype": "Intangible", "balance": 50, "status": "Archived" }
        ],
        "sales": [
            { "customer": "Acme", "product": "Consulting Hours", "amount": "1200", "date": "2024-05-02", "status": "Completed" }
        ],
        "expenses": [
            { "description": "May rent", "category": "Rent", "amount": "2000", "date": "2024-05-01", "status": "Approved" }
        ],
        "invoices": [
            { "client": "Acme", "amount": "1200", "issue_date": "2024-05-02", "due_date": "2024-06-01", "status": "Pending" }
        ]
    }"#;

    let workbook = Workbook::from_json(json).unwrap();

    assert_eq!(workbook.currency, Some(Currency::Eur));
    assert_eq!(workbook.accounts.len(), 2);
    assert_eq!(
        workbook.accounts[1].subtype,
        AccountSubtype::Unclassified("Intangible".to_string())
    );
    assert!(workbook.accounts[1].is_archived());
    assert_eq!(workbook.sales[0].amount, dec!(1200));
    assert_eq!(workbook.expenses[0].category, "Rent");

    let chart = workbook.chart().unwrap();
    assert_eq!(chart.active().count(), 1);
}

#[test]
fn test_malformed_json() {
    let err = Workbook::from_json("{ \"accounts\": [").unwrap_err();
    assert!(matches!(err, WorkbookError::Parse(_)));
    assert_eq!(AppError::from(err).error_code(), "PARSE_ERROR");
}

#[test]
fn test_unknown_status_is_rejected() {
    let json = r#"{ "sales": [
        { "customer": "Acme", "product": "X", "amount": "1", "date": "2024-05-02", "status": "Shipped" }
    ] }"#;

    assert!(matches!(
        Workbook::from_json(json).unwrap_err(),
        WorkbookError::Parse(_)
    ));
}

#[test]
fn test_duplicate_codes_rejected() {
    let json = r#"{ "accounts": [
        { "code": "1000", "name": "A", "type": "Asset", "subtype": "Bank", "balance": "1" },
        { "code": "1000", "name": "B", "type": "Asset", "subtype": "Bank", "balance": "2" }
    ] }"#;

    let err = Workbook::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        WorkbookError::Account(AccountError::DuplicateCode(ref code)) if code == "1000"
    ));
    assert_eq!(AppError::from(err).error_code(), "CONFLICT");
}

#[test]
fn test_negative_amount_rejected() {
    let json = r#"{ "expenses": [
        { "description": "Refund", "category": "Travel", "amount": "-20", "date": "2024-05-01", "status": "Approved" }
    ] }"#;

    let err = Workbook::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        WorkbookError::NegativeAmount { record: "Expense", .. }
    ));
    assert_eq!(AppError::from(err).error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_due_before_issue_rejected() {
    let json = r#"{ "invoices": [
        { "client": "Acme", "amount": "10", "issue_date": "2024-05-02", "due_date": "2024-05-01", "status": "Draft" }
    ] }"#;

    assert!(matches!(
        Workbook::from_json(json).unwrap_err(),
        WorkbookError::DueBeforeIssue { .. }
    ));
}

#[test]
fn test_sample_workbook_statements() {
    let workbook = Workbook::from_json(SAMPLE).unwrap();

    let statements = ReportService::generate_statements(
        &workbook,
        &KeywordCostPolicy::default(),
        &StatementAssumptions::default(),
    );

    assert!(statements.balance_sheet.is_balanced);
    assert_eq!(
        statements.balance_sheet.total_assets,
        statements.balance_sheet.total_liab_and_equity
    );
    assert!(statements.profit_and_loss.total_revenue > dec!(0));
    let grouped: rust_decimal::Decimal = statements
        .profit_and_loss
        .opex_by_category
        .iter()
        .map(|c| c.amount)
        .sum();
    assert_eq!(grouped, statements.profit_and_loss.total_opex);
    assert_eq!(
        statements.receivables.total_invoiced,
        statements.receivables.paid + statements.receivables.outstanding + statements.receivables.draft
    );
}

#[test]
fn test_subtype_labels_match_loosely() {
    let json = r#"{ "accounts": [
        { "code": "1000", "name": "Operating", "type": "Asset", "subtype": "bank", "balance": "800" },
        { "code": "2000", "name": "Card", "type": "Liability", "subtype": " credit card ", "balance": "200" }
    ] }"#;

    let workbook = Workbook::from_json(json).unwrap();
    let sheet =
        ReportService::generate_balance_sheet(&workbook.accounts, &StatementAssumptions::default());

    assert_eq!(workbook.accounts[0].subtype, AccountSubtype::Bank);
    assert_eq!(sheet.total_current_assets, dec!(800));
    assert_eq!(sheet.total_current_liabilities, dec!(200));
    assert!(sheet.unclassified_assets.accounts.is_empty());
    assert_eq!(sheet.current_ratio, dec!(4));
}

#[test]
fn test_default_currency_fills_only_missing() {
    let missing = Workbook::from_json("{}").unwrap().with_default_currency(Currency::Sgd);
    let named = Workbook::from_json(r#"{ "currency": "JPY" }"#)
        .unwrap()
        .with_default_currency(Currency::Sgd);

    assert_eq!(missing.currency, Some(Currency::Sgd));
    assert_eq!(named.currency, Some(Currency::Jpy));
}

#[test]
fn test_statements_default_to_usd_without_currency() {
    let statements = ReportService::generate_statements(
        &Workbook::default(),
        &KeywordCostPolicy::default(),
        &StatementAssumptions::default(),
    );

    assert_eq!(statements.currency, Currency::Usd);
}
