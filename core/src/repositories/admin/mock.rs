//! Mock implementation of AdminRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::admin::AdminGrant;
use crate::errors::DomainError;

use super::trait_::AdminRepository;

/// Mock admin repository for testing
#[derive(Default)]
pub struct MockAdminRepository {
    grants: Arc<RwLock<HashMap<Uuid, AdminGrant>>>,
}

impl MockAdminRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            grants: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AdminRepository for MockAdminRepository {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AdminGrant>, DomainError> {
        let grants = self.grants.read().await;
        Ok(grants.values().find(|g| g.account_id == account_id).cloned())
    }

    async fn create(&self, grant: AdminGrant) -> Result<AdminGrant, DomainError> {
        let mut grants = self.grants.write().await;

        if let Some(existing) = grants.values().find(|g| g.account_id == grant.account_id) {
            return Ok(existing.clone());
        }

        grants.insert(grant.id, grant.clone());
        Ok(grant)
    }

    async fn delete_by_account_id(&self, account_id: Uuid) -> Result<bool, DomainError> {
        let mut grants = self.grants.write().await;
        let id = grants
            .values()
            .find(|g| g.account_id == account_id)
            .map(|g| g.id);

        match id {
            Some(id) => {
                grants.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<AdminGrant>, DomainError> {
        let grants = self.grants.read().await;
        Ok(grants.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_grant_round_trip() {
        let repo = MockAdminRepository::new();
        let account_id = Uuid::new_v4();

        assert!(repo.find_by_account_id(account_id).await.unwrap().is_none());

        repo.create(AdminGrant::new(account_id, None)).await.unwrap();
        assert!(repo.find_by_account_id(account_id).await.unwrap().is_some());

        assert!(repo.delete_by_account_id(account_id).await.unwrap());
        assert!(repo.find_by_account_id(account_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_is_idempotent() {
        let repo = MockAdminRepository::new();
        let account_id = Uuid::new_v4();

        let first = repo.create(AdminGrant::new(account_id, None)).await.unwrap();
        let second = repo.create(AdminGrant::new(account_id, None)).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
