//! Teller operations: deposits, withdrawals, transfers, and loans

use crate::traits::*;
use crate::types::*;

/// Teller manager for movement-producing operations
///
/// Every operation validates completely before touching storage, so a
/// rejection is always a pure no-op.
pub struct TellerManager<S: DirectoryStorage> {
    storage: S,
    lending: Box<dyn LendingPolicy>,
}

impl<S: DirectoryStorage> TellerManager<S> {
    /// Create a new teller manager with the default lending policy
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            lending: Box::new(DefaultLendingPolicy),
        }
    }

    /// Create a new teller manager with a custom lending policy
    pub fn with_policy(storage: S, lending: Box<dyn LendingPolicy>) -> Self {
        Self { storage, lending }
    }

    async fn require(&self, username: &str) -> BankResult<Account> {
        self.storage
            .get_account(username)
            .await?
            .ok_or_else(|| BankError::AccountNotFound(username.to_string()))
    }

    /// Credit a deposit to an account
    pub async fn deposit(&mut self, username: &str, amount: i64) -> BankResult<()> {
        if amount <= 0 {
            return Err(BankError::Validation(
                "Deposit amount must be positive".to_string(),
            ));
        }

        let mut account = self.require(username).await?;
        account.record_movement(amount);
        self.storage.update_account(&account).await
    }

    /// Debit a withdrawal from an account
    pub async fn withdraw(&mut self, username: &str, amount: i64) -> BankResult<()> {
        if amount <= 0 {
            return Err(BankError::Validation(
                "Withdrawal amount must be positive".to_string(),
            ));
        }

        let mut account = self.require(username).await?;
        if account.balance() < amount {
            return Err(BankError::Validation(format!(
                "Insufficient funds: balance {} is below {}",
                account.balance(),
                amount
            )));
        }

        account.record_movement(-amount);
        self.storage.update_account(&account).await
    }

    /// Move funds between two accounts
    ///
    /// The sender is debited and the recipient credited as one unit; there
    /// is no partial-transfer state. The rejection conditions: non-positive
    /// amount, unknown recipient, insufficient sender balance, or sender
    /// and recipient being the same account.
    pub async fn transfer(&mut self, from: &str, to: &str, amount: i64) -> BankResult<()> {
        if amount <= 0 {
            return Err(BankError::TransferRejected(
                "Transfer amount must be positive".to_string(),
            ));
        }

        let mut sender = self.require(from).await?;

        let mut recipient = match self.storage.get_account(to).await? {
            Some(account) => account,
            None => {
                return Err(BankError::TransferRejected(format!(
                    "Recipient '{}' does not exist",
                    to
                )))
            }
        };

        if recipient.username == sender.username {
            return Err(BankError::TransferRejected(
                "Sender and recipient must differ".to_string(),
            ));
        }

        if sender.balance() < amount {
            return Err(BankError::TransferRejected(format!(
                "Insufficient funds: balance {} is below {}",
                sender.balance(),
                amount
            )));
        }

        // Debit first, then credit; both updates belong to one logical action
        sender.record_movement(-amount);
        recipient.record_movement(amount);
        self.storage.update_account(&sender).await?;
        self.storage.update_account(&recipient).await?;

        tracing::info!(from, to, amount, "transfer completed");
        Ok(())
    }

    /// Grant a loan if the lending policy approves
    ///
    /// On success the full amount is credited as a single deposit movement.
    pub async fn request_loan(&mut self, username: &str, amount: i64) -> BankResult<()> {
        if amount <= 0 {
            return Err(BankError::LoanRejected(
                "Loan amount must be positive".to_string(),
            ));
        }

        let mut account = self.require(username).await?;

        if !self.lending.approve(&account, amount) {
            tracing::debug!(username, amount, "loan declined by policy");
            return Err(BankError::LoanRejected(format!(
                "Movement history does not support a loan of {}",
                amount
            )));
        }

        account.record_movement(amount);
        self.storage.update_account(&account).await?;

        tracing::info!(username, amount, "loan granted");
        Ok(())
    }
}
