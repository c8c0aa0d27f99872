//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Mock account repository for testing
#[derive(Default)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut matches: Vec<&Account> =
            accounts.values().filter(|a| a.email == email).collect();
        matches.sort_by_key(|a| a.created_at);
        Ok(matches.first().map(|a| (*a).clone()))
    }

    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .filter(|a| a.email == email)
            .cloned()
            .collect())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.username == username))
    }

    async fn email_taken_by_other(
        &self,
        email: &str,
        excluding: Uuid,
    ) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .any(|a| a.email == email && a.id != excluding))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.username == account.username) {
            return Err(DomainError::Validation {
                message: "Username already taken".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> Account {
        Account::new(
            username.to_string(),
            email.to_string(),
            "$2b$12$hash".to_string(),
            "Test".to_string(),
            "User".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockAccountRepository::new();
        let created = repo.create(account("jane", "jane@example.com")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));

        let by_email = repo.find_by_email("jane@example.com").await.unwrap();
        assert_eq!(by_email.map(|a| a.id), Some(created.id));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = MockAccountRepository::new();
        repo.create(account("jane", "jane@example.com")).await.unwrap();

        let result = repo.create(account("jane", "other@example.com")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_email_taken_by_other() {
        let repo = MockAccountRepository::new();
        let a = repo.create(account("a", "shared@example.com")).await.unwrap();
        repo.create(account("b", "shared@example.com")).await.unwrap();

        assert!(repo.email_taken_by_other("shared@example.com", a.id).await.unwrap());
        assert!(!repo.email_taken_by_other("only@example.com", a.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let repo = MockAccountRepository::new();
        let result = repo.update(account("ghost", "ghost@example.com")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
