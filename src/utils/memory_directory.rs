//! In-memory directory implementation for testing and development

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory account directory
///
/// Accounts are kept as an ordered sequence and resolved by linear search,
/// matching the directory's semantics: insertion order is preserved and the
/// collection stays small. Clones share the same underlying directory.
#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl MemoryDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all accounts (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryStorage for MemoryDirectory {
    async fn save_account(&mut self, account: &Account) -> BankResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        match accounts.iter_mut().find(|a| a.username == account.username) {
            Some(existing) => *existing = account.clone(),
            None => accounts.push(account.clone()),
        }
        Ok(())
    }

    async fn get_account(&self, username: &str) -> BankResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn list_accounts(&self) -> BankResult<Vec<Account>> {
        Ok(self.accounts.read().unwrap().clone())
    }

    async fn update_account(&mut self, account: &Account) -> BankResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        match accounts.iter_mut().find(|a| a.username == account.username) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(BankError::AccountNotFound(account.username.clone())),
        }
    }

    async fn delete_account(&mut self, username: &str) -> BankResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        match accounts.iter().position(|a| a.username == username) {
            Some(index) => {
                accounts.remove(index);
                Ok(())
            }
            None => Err(BankError::AccountNotFound(username.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn account(owner: &str, pin: u32) -> Account {
        Account::new(owner.to_string(), pin, BigDecimal::from(1))
    }

    #[tokio::test]
    async fn test_directory_preserves_insertion_order() {
        let mut storage = MemoryDirectory::new();
        storage.save_account(&account("Jonas Schmedtmann", 1111)).await.unwrap();
        storage.save_account(&account("Jessica Davis", 2222)).await.unwrap();
        storage.save_account(&account("Sarah Smith", 4444)).await.unwrap();

        let usernames: Vec<String> = storage
            .list_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(usernames, vec!["js", "jd", "ss"]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let mut storage = MemoryDirectory::new();
        storage.save_account(&account("Jonas Schmedtmann", 1111)).await.unwrap();
        storage.save_account(&account("Jessica Davis", 2222)).await.unwrap();

        storage.delete_account("js").await.unwrap();
        assert_eq!(storage.list_accounts().await.unwrap().len(), 1);

        // Second delete finds nothing
        assert!(storage.delete_account("js").await.is_err());
        assert_eq!(storage.list_accounts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_requires_existing_account() {
        let mut storage = MemoryDirectory::new();
        let missing = account("Jonas Schmedtmann", 1111);
        assert!(storage.update_account(&missing).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_the_directory() {
        let mut storage = MemoryDirectory::new();
        let view = storage.clone();

        storage.save_account(&account("Sarah Smith", 4444)).await.unwrap();
        assert!(view.get_account("ss").await.unwrap().is_some());
    }
}
