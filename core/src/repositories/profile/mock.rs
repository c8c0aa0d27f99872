//! Mock implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

use super::trait_::ProfileRepository;

/// Mock profile repository for testing
///
/// The `consume_*` methods perform their compare-and-clear under a single
/// write lock, matching the conditional-update semantics of the SQL
/// implementation.
#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl MockProfileRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .find(|p| p.account_id == account_id)
            .cloned())
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .find(|p| p.verification_token.as_deref() == Some(token))
            .cloned())
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .find(|p| p.reset_token.as_deref() == Some(token))
            .cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if profiles.values().any(|p| p.account_id == profile.account_id) {
            return Err(DomainError::Validation {
                message: "Account already has a profile".to_string(),
            });
        }

        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if !profiles.contains_key(&profile.id) {
            return Err(DomainError::NotFound {
                resource: "Profile".to_string(),
            });
        }

        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn consume_verification_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.write().await;

        match profiles.get_mut(&profile_id) {
            Some(profile) if profile.verification_token.as_deref() == Some(token) => {
                profile.mark_email_verified();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn consume_reset_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.write().await;

        match profiles.get_mut(&profile_id) {
            Some(profile) if profile.reset_token.as_deref() == Some(token) => {
                profile.clear_reset_token();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_verification_token() {
        let repo = MockProfileRepository::new();
        let mut profile = Profile::new(Uuid::new_v4());
        let token = profile.issue_verification_token();
        repo.create(profile.clone()).await.unwrap();

        let found = repo.find_by_verification_token(&token).await.unwrap();
        assert_eq!(found.map(|p| p.id), Some(profile.id));

        assert!(repo
            .find_by_verification_token("unknown")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_consume_verification_token_is_single_use() {
        let repo = MockProfileRepository::new();
        let mut profile = Profile::new(Uuid::new_v4());
        let token = profile.issue_verification_token();
        repo.create(profile.clone()).await.unwrap();

        assert!(repo
            .consume_verification_token(profile.id, &token)
            .await
            .unwrap());
        // Second consumption attempt loses
        assert!(!repo
            .consume_verification_token(profile.id, &token)
            .await
            .unwrap());

        let stored = repo.find_by_account_id(profile.account_id).await.unwrap().unwrap();
        assert!(stored.email_verified);
        assert!(stored.verification_token.is_none());
    }

    #[tokio::test]
    async fn test_consume_reset_token_mismatch() {
        let repo = MockProfileRepository::new();
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_reset_token();
        repo.create(profile.clone()).await.unwrap();

        assert!(!repo.consume_reset_token(profile.id, "wrong").await.unwrap());

        let stored = repo.find_by_account_id(profile.account_id).await.unwrap().unwrap();
        assert!(stored.reset_token.is_some());
    }

    #[tokio::test]
    async fn test_one_profile_per_account() {
        let repo = MockProfileRepository::new();
        let account_id = Uuid::new_v4();
        repo.create(Profile::new(account_id)).await.unwrap();

        let result = repo.create(Profile::new(account_id)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
