//! Chart of accounts domain types.

use ledgerdesk_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level classification of a ledger account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Resources owned.
    Asset,
    /// Obligations owed.
    Liability,
    /// Owners' stake.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Finer classification used to split the balance sheet.
///
/// Parsing never fails: labels outside the known set become
/// [`AccountSubtype::Unclassified`] and keep their original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountSubtype {
    /// Receivables, inventory, prepaid items.
    CurrentAsset,
    /// Cash held at a bank.
    Bank,
    /// Property, plant, equipment.
    FixedAsset,
    /// Payables due within a year.
    CurrentLiability,
    /// Card balances.
    CreditCard,
    /// Loans and other obligations beyond a year.
    LongTermLiability,
    /// Capital and reserves.
    Equity,
    /// Operating income.
    Income,
    /// Direct cost of sales.
    CostOfGoodsSold,
    /// Operating expense.
    Expense,
    /// Anything else, with the label as entered.
    Unclassified(String),
}

impl AccountSubtype {
    const KNOWN: [Self; 10] = [
        Self::CurrentAsset,
        Self::Bank,
        Self::FixedAsset,
        Self::CurrentLiability,
        Self::CreditCard,
        Self::LongTermLiability,
        Self::Equity,
        Self::Income,
        Self::CostOfGoodsSold,
        Self::Expense,
    ];

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::CurrentAsset => "Current Asset",
            Self::Bank => "Bank",
            Self::FixedAsset => "Fixed Asset",
            Self::CurrentLiability => "Current Liability",
            Self::CreditCard => "Credit Card",
            Self::LongTermLiability => "Long Term Liability",
            Self::Equity => "Equity",
            Self::Income => "Income",
            Self::CostOfGoodsSold => "Cost of Goods Sold",
            Self::Expense => "Expense",
            Self::Unclassified(label) => label,
        }
    }

    /// Parses a free-text label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        Self::KNOWN
            .into_iter()
            .find(|known| known.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Unclassified(trimmed.to_string()))
    }

    /// Returns true for subtypes counted as current assets.
    #[must_use]
    pub fn is_current_asset(&self) -> bool {
        matches!(self, Self::CurrentAsset | Self::Bank)
    }

    /// Returns true for subtypes counted as current liabilities.
    #[must_use]
    pub fn is_current_liability(&self) -> bool {
        matches!(self, Self::CurrentLiability | Self::CreditCard)
    }
}

impl From<String> for AccountSubtype {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<AccountSubtype> for String {
    fn from(subtype: AccountSubtype) -> Self {
        match subtype {
            AccountSubtype::Unclassified(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for AccountSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an account is in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Open for use.
    #[default]
    Active,
    /// Hidden from pickers, still reported.
    Archived,
}

/// A ledger account in the chart of accounts.
///
/// `balance` is a standalone running figure, not derived from postings.
/// Its sign is kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlAccount {
    /// Account ID.
    #[serde(default)]
    pub id: AccountId,
    /// Human ledger code, unique within the chart.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Account subtype.
    pub subtype: AccountSubtype,
    /// Running balance.
    pub balance: Decimal,
    /// Account status.
    #[serde(default)]
    pub status: AccountStatus,
}

impl GlAccount {
    /// Creates an active account with a fresh ID.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        subtype: AccountSubtype,
        balance: Decimal,
    ) -> Self {
        Self {
            id: AccountId::new(),
            code: code.into(),
            name: name.into(),
            account_type,
            subtype,
            balance,
            status: AccountStatus::Active,
        }
    }

    /// Returns true if the account is archived.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status == AccountStatus::Archived
    }
}

/// Input for adding an account to the chart.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Ledger code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Account subtype.
    pub subtype: AccountSubtype,
    /// Opening balance.
    pub balance: Decimal,
}

/// In-place edit of an account. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    /// New ledger code.
    pub code: Option<String>,
    /// New name.
    pub name: Option<String>,
    /// New type.
    pub account_type: Option<AccountType>,
    /// New subtype.
    pub subtype: Option<AccountSubtype>,
    /// New balance.
    pub balance: Option<Decimal>,
    /// New status.
    pub status: Option<AccountStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Current Asset", AccountSubtype::CurrentAsset)]
    #[case("bank", AccountSubtype::Bank)]
    #[case("  Fixed Asset ", AccountSubtype::FixedAsset)]
    #[case("Credit Card", AccountSubtype::CreditCard)]
    #[case("LONG TERM LIABILITY", AccountSubtype::LongTermLiability)]
    #[case("Cost of Goods Sold", AccountSubtype::CostOfGoodsSold)]
    #[case("Intangible", AccountSubtype::Unclassified("Intangible".to_string()))]
    fn test_subtype_parse(#[case] label: &str, #[case] expected: AccountSubtype) {
        assert_eq!(AccountSubtype::parse(label), expected);
    }

    #[test]
    fn test_subtype_current_flags() {
        assert!(AccountSubtype::Bank.is_current_asset());
        assert!(AccountSubtype::CurrentAsset.is_current_asset());
        assert!(!AccountSubtype::FixedAsset.is_current_asset());
        assert!(AccountSubtype::CreditCard.is_current_liability());
        assert!(!AccountSubtype::LongTermLiability.is_current_liability());
    }

    #[test]
    fn test_account_json_shape() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "code": "1000",
            "name": "Operating Account",
            "type": "Asset",
            "subtype": "Bank",
            "balance": "45000.50"
        }"#;

        let account: GlAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Asset);
        assert_eq!(account.subtype, AccountSubtype::Bank);
        assert_eq!(account.balance, Decimal::new(4_500_050, 2));
        assert_eq!(account.status, AccountStatus::Active);

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["subtype"], "Bank");
        assert_eq!(back["type"], "Asset");
    }

    #[test]
    fn test_unclassified_subtype_keeps_label() {
        let subtype: AccountSubtype = serde_json::from_str("\"Intangible Asset\"").unwrap();
        assert_eq!(String::from(subtype), "Intangible Asset");
    }
}
