//! Admin service implementation
//!
//! `is_admin` is the only admin check in the system and it reads the grant
//! table alone. Startup seeding turns a configured email list into grant
//! rows; afterwards the list plays no further part.

use std::sync::Arc;
use uuid::Uuid;

use mr_shared::utils::validation::mask_email;

use crate::domain::entities::admin::AdminGrant;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AccountRepository, AdminRepository};

/// Admin capability service
pub struct AdminService<A, D>
where
    A: AccountRepository,
    D: AdminRepository,
{
    account_repository: Arc<A>,
    admin_repository: Arc<D>,
}

impl<A, D> AdminService<A, D>
where
    A: AccountRepository,
    D: AdminRepository,
{
    /// Create a new admin service
    pub fn new(account_repository: Arc<A>, admin_repository: Arc<D>) -> Self {
        Self {
            account_repository,
            admin_repository,
        }
    }

    /// The single admin capability check
    pub async fn is_admin(&self, account_id: Uuid) -> DomainResult<bool> {
        Ok(self
            .admin_repository
            .find_by_account_id(account_id)
            .await?
            .is_some())
    }

    /// Grant the admin capability to an account
    ///
    /// The actor must be an admin. Granting an existing admin is a no-op.
    pub async fn grant(&self, actor_id: Uuid, target_id: Uuid) -> DomainResult<AdminGrant> {
        self.ensure_admin(actor_id).await?;

        if self
            .account_repository
            .find_by_id(target_id)
            .await?
            .is_none()
        {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        let grant = self
            .admin_repository
            .create(AdminGrant::new(target_id, Some(actor_id)))
            .await?;

        tracing::info!(
            actor_id = %actor_id,
            target_id = %target_id,
            event = "admin_granted",
            "Admin capability granted"
        );

        Ok(grant)
    }

    /// Revoke the admin capability from an account
    ///
    /// Admins cannot revoke themselves, so the last admin cannot lock the
    /// panel.
    pub async fn revoke(&self, actor_id: Uuid, target_id: Uuid) -> DomainResult<bool> {
        self.ensure_admin(actor_id).await?;

        if actor_id == target_id {
            return Err(DomainError::Validation {
                message: "Admins cannot revoke their own access".to_string(),
            });
        }

        let removed = self.admin_repository.delete_by_account_id(target_id).await?;
        if removed {
            tracing::info!(
                actor_id = %actor_id,
                target_id = %target_id,
                event = "admin_revoked",
                "Admin capability revoked"
            );
        }
        Ok(removed)
    }

    /// List every grant
    pub async fn list(&self) -> DomainResult<Vec<AdminGrant>> {
        self.admin_repository.list().await
    }

    /// Seed grants from a configured email list at startup
    ///
    /// Emails without an account are skipped; returns how many new grants
    /// were created.
    pub async fn seed_admins(&self, emails: &[String]) -> DomainResult<usize> {
        let mut granted = 0;

        for email in emails {
            let Some(account) = self.account_repository.find_by_email(email).await? else {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "admin_seed_skipped",
                    "Seed admin email has no account"
                );
                continue;
            };

            if self
                .admin_repository
                .find_by_account_id(account.id)
                .await?
                .is_none()
            {
                self.admin_repository
                    .create(AdminGrant::new(account.id, None))
                    .await?;
                granted += 1;
            }
        }

        if granted > 0 {
            tracing::info!(count = granted, event = "admin_seeded", "Seeded admin grants");
        }

        Ok(granted)
    }

    async fn ensure_admin(&self, account_id: Uuid) -> DomainResult<()> {
        if self.is_admin(account_id).await? {
            Ok(())
        } else {
            Err(AuthError::NotAuthorized.into())
        }
    }
}
