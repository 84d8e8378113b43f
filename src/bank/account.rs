//! Account management functionality

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::traits::*;
use crate::types::*;

/// Account manager for directory lifecycle operations
pub struct AccountManager<S: DirectoryStorage> {
    pub(crate) storage: S,
    validator: Box<dyn AccountValidator>,
}

impl<S: DirectoryStorage> AccountManager<S> {
    /// Create a new account manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultAccountValidator),
        }
    }

    /// Create a new account manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn AccountValidator>) -> Self {
        Self { storage, validator }
    }

    /// Open a new account
    ///
    /// The username is derived from the owner name. Two owners whose
    /// initials collide cannot share a directory: the second open is
    /// rejected rather than silently shadowing the first.
    pub async fn open_account(
        &mut self,
        owner: &str,
        pin: u32,
        interest_rate: BigDecimal,
    ) -> BankResult<Account> {
        let account = Account::new(owner.to_string(), pin, interest_rate);

        // Validate the account
        self.validator.validate_account(&account)?;

        // Check for a username collision
        if self.storage.get_account(&account.username).await?.is_some() {
            return Err(BankError::DuplicateUsername(account.username.clone()));
        }

        // Save the account
        self.storage.save_account(&account).await?;
        tracing::info!(username = %account.username, "opened account");

        Ok(account)
    }

    /// Get an account by username
    pub async fn get_account(&self, username: &str) -> BankResult<Option<Account>> {
        self.storage.get_account(username).await
    }

    /// Get an account by username, returning an error if not found
    pub async fn get_account_required(&self, username: &str) -> BankResult<Account> {
        self.storage
            .get_account(username)
            .await?
            .ok_or_else(|| BankError::AccountNotFound(username.to_string()))
    }

    /// List all accounts in directory order
    pub async fn list_accounts(&self) -> BankResult<Vec<Account>> {
        self.storage.list_accounts().await
    }

    /// Update an account
    pub async fn update_account(&mut self, account: &Account) -> BankResult<()> {
        // Ensure the account exists
        if self.storage.get_account(&account.username).await?.is_none() {
            return Err(BankError::AccountNotFound(account.username.clone()));
        }

        self.storage.update_account(account).await
    }

    /// Close an account, removing it from the directory
    ///
    /// Returns the removed account. A second close on the same username
    /// reports not-found and changes nothing.
    pub async fn close_account(&mut self, username: &str) -> BankResult<Account> {
        let account = self.get_account_required(username).await?;

        self.validator.validate_closure(&account)?;

        self.storage.delete_account(username).await?;
        tracing::info!(username, "closed account");

        Ok(account)
    }

    /// Get an account's current balance
    pub async fn get_balance(&self, username: &str) -> BankResult<i64> {
        Ok(self.get_account_required(username).await?.balance())
    }
}

/// Utility functions for working with accounts
pub mod utils {
    use super::*;

    /// Seed the directory with the four demo accounts
    ///
    /// These are the stock accounts used by the demos and the test suite,
    /// complete with their historical movements.
    pub async fn seed_demo_accounts<S: DirectoryStorage>(
        account_manager: &mut AccountManager<S>,
    ) -> BankResult<HashMap<String, Account>> {
        // (owner, pin, interest rate in tenths of a percent, movements)
        let seeds: [(&str, u32, i64, &[i64]); 4] = [
            (
                "Jonas Schmedtmann",
                1111,
                12,
                &[200, 450, -400, 3000, -650, -130, 70, 1300],
            ),
            (
                "Jessica Davis",
                2222,
                15,
                &[5000, 3400, -150, -790, -3210, -1000, 8500, -30],
            ),
            (
                "Steven Thomas Williams",
                3333,
                7,
                &[200, -200, 340, -300, -20, 50, 400, -460],
            ),
            ("Sarah Smith", 4444, 10, &[430, 1000, 700, 50, 90]),
        ];

        let mut accounts = HashMap::new();
        for (owner, pin, rate_tenths, movements) in seeds {
            let rate = BigDecimal::from(rate_tenths) / BigDecimal::from(10);
            let mut account = account_manager.open_account(owner, pin, rate).await?;
            account.movements = movements.to_vec();
            account_manager.update_account(&account).await?;
            accounts.insert(account.username.clone(), account);
        }

        Ok(accounts)
    }
}
