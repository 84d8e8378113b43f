//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the account directory
///
/// This trait allows the banking engine to work with any storage backend
/// (PostgreSQL, MySQL, SQLite, in-memory, etc.) by implementing these
/// methods. Implementations must preserve insertion order: the directory is
/// an ordered sequence of accounts, unique by username.
#[async_trait]
pub trait DirectoryStorage: Send + Sync {
    /// Save a newly opened account
    async fn save_account(&mut self, account: &Account) -> BankResult<()>;

    /// Look up an account by username
    async fn get_account(&self, username: &str) -> BankResult<Option<Account>>;

    /// List all accounts in directory order
    async fn list_accounts(&self) -> BankResult<Vec<Account>>;

    /// Update an existing account
    async fn update_account(&mut self, account: &Account) -> BankResult<()>;

    /// Remove an account from the directory
    async fn delete_account(&mut self, username: &str) -> BankResult<()>;
}

/// Trait for implementing custom account validation rules
pub trait AccountValidator: Send + Sync {
    /// Validate an account before it is opened
    fn validate_account(&self, account: &Account) -> BankResult<()>;

    /// Validate account closure
    fn validate_closure(&self, account: &Account) -> BankResult<()>;
}

/// Trait for loan underwriting rules
///
/// The policy only judges the evidence in the movement history; amount
/// positivity is checked before the policy is consulted.
pub trait LendingPolicy: Send + Sync {
    /// Whether the account qualifies for a loan of the given amount
    fn approve(&self, account: &Account, amount: i64) -> bool;
}

/// Default account validator with basic rules
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_account(&self, account: &Account) -> BankResult<()> {
        if account.owner.trim().is_empty() {
            return Err(BankError::Validation(
                "Owner name cannot be empty".to_string(),
            ));
        }

        if account.username.is_empty() {
            return Err(BankError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_closure(&self, _account: &Account) -> BankResult<()> {
        // Closure is always allowed once credentials have been confirmed
        Ok(())
    }
}

/// Default underwriting rule: the history must contain at least one movement
/// of at least 10% of the requested amount
pub struct DefaultLendingPolicy;

impl LendingPolicy for DefaultLendingPolicy {
    fn approve(&self, account: &Account, amount: i64) -> bool {
        account
            .movements
            .iter()
            .any(|m| m.saturating_mul(10) >= amount)
    }
}
