//! Admin grant repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::admin::AdminGrant;
use crate::errors::DomainError;

/// Repository trait for admin capability grants (one per account)
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find the grant held by an account
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AdminGrant>, DomainError>;

    /// Create a grant; returns the existing one when already granted
    async fn create(&self, grant: AdminGrant) -> Result<AdminGrant, DomainError>;

    /// Delete an account's grant; `Ok(false)` when none existed
    async fn delete_by_account_id(&self, account_id: Uuid) -> Result<bool, DomainError>;

    /// List every grant
    async fn list(&self) -> Result<Vec<AdminGrant>, DomainError>;
}
