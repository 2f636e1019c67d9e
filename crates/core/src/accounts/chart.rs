//! In-memory chart of accounts store.

use ledgerdesk_shared::types::AccountId;
use tracing::debug;

use super::error::AccountError;
use super::types::{AccountStatus, AccountUpdate, GlAccount, NewAccount};

/// Owned list of ledger accounts keyed by unique code.
///
/// Insertion order is preserved; it is the order the statements list
/// accounts in.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: Vec<GlAccount>,
}

impl ChartOfAccounts {
    /// Creates an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chart from existing accounts, checking code uniqueness.
    pub fn from_accounts(accounts: Vec<GlAccount>) -> Result<Self, AccountError> {
        let mut chart = Self::new();
        for mut account in accounts {
            chart.ensure_code_free(&account.code, None)?;
            account.code = account.code.trim().to_string();
            chart.accounts.push(account);
        }
        Ok(chart)
    }

    /// Adds a new active account.
    pub fn add(&mut self, input: NewAccount) -> Result<&GlAccount, AccountError> {
        self.ensure_code_free(&input.code, None)?;

        let account = GlAccount::new(
            input.code.trim(),
            input.name,
            input.account_type,
            input.subtype,
            input.balance,
        );
        debug!(code = %account.code, id = %account.id, "Account added");
        self.accounts.push(account);

        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// Applies an in-place edit.
    pub fn update(
        &mut self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<&GlAccount, AccountError> {
        let index = self.position(id)?;
        if let Some(code) = &update.code {
            self.ensure_code_free(code, Some(id))?;
        }

        let account = &mut self.accounts[index];
        if let Some(code) = update.code {
            account.code = code.trim().to_string();
        }
        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(account_type) = update.account_type {
            account.account_type = account_type;
        }
        if let Some(subtype) = update.subtype {
            account.subtype = subtype;
        }
        if let Some(balance) = update.balance {
            account.balance = balance;
        }
        if let Some(status) = update.status {
            account.status = status;
        }
        debug!(code = %account.code, id = %id, "Account updated");

        Ok(&self.accounts[index])
    }

    /// Marks an account as archived.
    pub fn archive(&mut self, id: AccountId) -> Result<&GlAccount, AccountError> {
        self.update(
            id,
            AccountUpdate {
                status: Some(AccountStatus::Archived),
                ..AccountUpdate::default()
            },
        )
    }

    /// Removes an account and returns it.
    pub fn remove(&mut self, id: AccountId) -> Result<GlAccount, AccountError> {
        let index = self.position(id)?;
        let account = self.accounts.remove(index);
        debug!(code = %account.code, id = %id, "Account removed");
        Ok(account)
    }

    /// Looks up an account by ID.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&GlAccount> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&GlAccount> {
        let code = code.trim();
        self.accounts.iter().find(|a| a.code == code)
    }

    /// Returns all accounts in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[GlAccount] {
        &self.accounts
    }

    /// Iterates over accounts that are not archived.
    pub fn active(&self) -> impl Iterator<Item = &GlAccount> {
        self.accounts.iter().filter(|a| !a.is_archived())
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the chart holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Consumes the chart, returning its accounts.
    #[must_use]
    pub fn into_accounts(self) -> Vec<GlAccount> {
        self.accounts
    }

    fn position(&self, id: AccountId) -> Result<usize, AccountError> {
        self.accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(AccountError::AccountNotFound(id))
    }

    fn ensure_code_free(&self, code: &str, owner: Option<AccountId>) -> Result<(), AccountError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AccountError::EmptyCode);
        }
        let taken = self
            .accounts
            .iter()
            .any(|a| a.code == code && Some(a.id) != owner);
        if taken {
            return Err(AccountError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}
