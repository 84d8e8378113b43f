//! Main bank orchestrator that coordinates accounts and teller operations

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::bank::{AccountManager, TellerManager};
use crate::summary::{statement, AccountSummary, StatementLine};
use crate::traits::*;
use crate::types::*;

/// Main bank engine that orchestrates all directory operations
pub struct Bank<S: DirectoryStorage> {
    account_manager: AccountManager<S>,
    teller: TellerManager<S>,
}

impl<S: DirectoryStorage + Clone> Bank<S> {
    /// Create a new bank with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            account_manager: AccountManager::new(storage.clone()),
            teller: TellerManager::new(storage),
        }
    }

    /// Create a new bank with a custom validator and lending policy
    pub fn with_components(
        storage: S,
        account_validator: Box<dyn AccountValidator>,
        lending_policy: Box<dyn LendingPolicy>,
    ) -> Self {
        Self {
            account_manager: AccountManager::with_validator(storage.clone(), account_validator),
            teller: TellerManager::with_policy(storage, lending_policy),
        }
    }

    // Account operations
    /// Open a new account
    pub async fn open_account(
        &mut self,
        owner: &str,
        pin: u32,
        interest_rate: BigDecimal,
    ) -> BankResult<Account> {
        self.account_manager
            .open_account(owner, pin, interest_rate)
            .await
    }

    /// Get an account by username
    pub async fn get_account(&self, username: &str) -> BankResult<Option<Account>> {
        self.account_manager.get_account(username).await
    }

    /// List all accounts in directory order
    pub async fn list_accounts(&self) -> BankResult<Vec<Account>> {
        self.account_manager.list_accounts().await
    }

    /// Seed the directory with the stock demo accounts
    pub async fn seed_demo_accounts(
        &mut self,
    ) -> BankResult<std::collections::HashMap<String, Account>> {
        crate::bank::account::utils::seed_demo_accounts(&mut self.account_manager).await
    }

    // Authentication
    /// Authenticate by username and pin
    ///
    /// A wrong username and a wrong pin are indistinguishable to the
    /// caller; both come back as invalid credentials.
    pub async fn authenticate(&self, username: &str, pin: u32) -> BankResult<Account> {
        match self.account_manager.get_account(username).await? {
            Some(account) if account.pin == pin => Ok(account),
            _ => {
                tracing::warn!(username, "failed authentication");
                Err(BankError::InvalidCredentials)
            }
        }
    }

    /// Authenticate and bind the session
    ///
    /// A failed login leaves the session untouched.
    pub async fn login(
        &self,
        username: &str,
        pin: u32,
        session: &mut Session,
    ) -> BankResult<Account> {
        let account = self.authenticate(username, pin).await?;
        session.login(&account.username);
        Ok(account)
    }

    // Teller operations
    /// Credit a deposit to an account
    pub async fn deposit(&mut self, username: &str, amount: i64) -> BankResult<()> {
        self.teller.deposit(username, amount).await
    }

    /// Debit a withdrawal from an account
    pub async fn withdraw(&mut self, username: &str, amount: i64) -> BankResult<()> {
        self.teller.withdraw(username, amount).await
    }

    /// Move funds between two accounts
    pub async fn transfer(&mut self, from: &str, to: &str, amount: i64) -> BankResult<()> {
        self.teller.transfer(from, to, amount).await
    }

    /// Grant a loan if the lending policy approves
    pub async fn request_loan(&mut self, username: &str, amount: i64) -> BankResult<()> {
        self.teller.request_loan(username, amount).await
    }

    /// Close an account after re-confirming its credentials
    ///
    /// Returns the removed account. The caller is responsible for
    /// invalidating any session bound to it (`Session::invalidate_for`).
    /// Closing an already-removed username reports not-found.
    pub async fn close_account(&mut self, username: &str, pin: u32) -> BankResult<Account> {
        let account = self.account_manager.get_account_required(username).await?;
        if account.pin != pin {
            return Err(BankError::InvalidCredentials);
        }

        self.account_manager.close_account(username).await
    }

    // Derived reads
    /// Current balance of an account
    pub async fn balance_of(&self, username: &str) -> BankResult<i64> {
        self.account_manager.get_balance(username).await
    }

    /// Deposit/withdrawal totals and credited interest for an account
    pub async fn summary_of(&self, username: &str) -> BankResult<AccountSummary> {
        let account = self.account_manager.get_account_required(username).await?;
        Ok(AccountSummary::calculate(
            &account.movements,
            &account.interest_rate,
        ))
    }

    /// Statement rows for an account, chronological or sorted ascending
    pub async fn statement_of(
        &self,
        username: &str,
        sorted: bool,
    ) -> BankResult<Vec<StatementLine>> {
        let account = self.account_manager.get_account_required(username).await?;
        Ok(statement(&account.movements, sorted))
    }

    /// Validate the integrity of the directory
    pub async fn validate_integrity(&self) -> BankResult<DirectoryIntegrityReport> {
        let accounts = self.list_accounts().await?;

        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for account in &accounts {
            if !seen.insert(account.username.clone()) {
                issues.push(format!("Duplicate username: {}", account.username));
            }

            let expected = Account::derive_username(&account.owner);
            if account.username != expected {
                issues.push(format!(
                    "Username '{}' does not match owner '{}' (expected '{}')",
                    account.username, account.owner, expected
                ));
            }
        }

        let combined_balance = accounts.iter().map(|account| account.balance()).sum();

        Ok(DirectoryIntegrityReport {
            is_valid: issues.is_empty(),
            issues,
            account_count: accounts.len(),
            combined_balance,
        })
    }
}

/// Report on directory integrity and validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryIntegrityReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub account_count: usize,
    /// Sum of every account's balance across the directory
    pub combined_balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_directory::MemoryDirectory;

    #[tokio::test]
    async fn test_bank_basic_operations() {
        let storage = MemoryDirectory::new();
        let mut bank = Bank::new(storage);

        let account = bank
            .open_account(
                "Jonas Schmedtmann",
                1111,
                BigDecimal::from(12) / BigDecimal::from(10),
            )
            .await
            .unwrap();
        assert_eq!(account.username, "js");

        bank.deposit("js", 200).await.unwrap();
        bank.deposit("js", 450).await.unwrap();
        bank.withdraw("js", 400).await.unwrap();

        assert_eq!(bank.balance_of("js").await.unwrap(), 250);

        let fetched = bank.get_account("js").await.unwrap().unwrap();
        assert_eq!(fetched.movements, vec![200, 450, -400]);
    }

    #[tokio::test]
    async fn test_bank_login_binds_session() {
        let storage = MemoryDirectory::new();
        let mut bank = Bank::new(storage);
        bank.seed_demo_accounts().await.unwrap();

        let mut session = Session::new();
        let account = bank.login("js", 1111, &mut session).await.unwrap();
        assert_eq!(account.first_name(), "Jonas");
        assert_eq!(session.current(), Some("js"));

        let mut other = Session::new();
        assert!(bank.login("js", 9999, &mut other).await.is_err());
        assert!(!other.is_active());
    }

    #[tokio::test]
    async fn test_bank_integrity_report() {
        let storage = MemoryDirectory::new();
        let mut bank = Bank::new(storage);
        bank.seed_demo_accounts().await.unwrap();

        let report = bank.validate_integrity().await.unwrap();
        assert!(report.is_valid);
        assert_eq!(report.account_count, 4);
        // 3840 + 11720 + 10 + 2270
        assert_eq!(report.combined_balance, 17840);
    }
}
