//! MySQL implementation of the AdminRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::admin::AdminGrant;
use mr_core::errors::DomainError;
use mr_core::repositories::AdminRepository;

/// MySQL implementation of AdminRepository
pub struct MySqlAdminRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAdminRepository {
    /// Create a new MySQL admin repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to AdminGrant entity
    fn row_to_grant(row: &sqlx::mysql::MySqlRow) -> Result<AdminGrant, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| internal(format!("Failed to get id: {}", e)))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| internal(format!("Failed to get account_id: {}", e)))?;
        let granted_by: Option<String> = row
            .try_get("granted_by")
            .map_err(|e| internal(format!("Failed to get granted_by: {}", e)))?;

        Ok(AdminGrant {
            id: Uuid::parse_str(&id)
                .map_err(|e| internal(format!("Invalid grant UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| internal(format!("Invalid account UUID: {}", e)))?,
            granted_by: granted_by
                .map(|g| {
                    Uuid::parse_str(&g)
                        .map_err(|e| internal(format!("Invalid granter UUID: {}", e)))
                })
                .transpose()?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl AdminRepository for MySqlAdminRepository {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AdminGrant>, DomainError> {
        let result = sqlx::query(
            "SELECT id, account_id, granted_by, created_at FROM admin_grants \
             WHERE account_id = ? LIMIT 1",
        )
        .bind(account_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| internal(format!("Failed to find admin grant: {}", e)))?;

        result.map(|row| Self::row_to_grant(&row)).transpose()
    }

    async fn create(&self, grant: AdminGrant) -> Result<AdminGrant, DomainError> {
        sqlx::query(
            "INSERT IGNORE INTO admin_grants (id, account_id, granted_by, created_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(grant.id.to_string())
        .bind(grant.account_id.to_string())
        .bind(grant.granted_by.map(|g| g.to_string()))
        .bind(grant.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| internal(format!("Failed to create admin grant: {}", e)))?;

        // Return the stored grant (the existing one when already granted)
        self.find_by_account_id(grant.account_id)
            .await?
            .ok_or_else(|| internal("Admin grant disappeared after insert".to_string()))
    }

    async fn delete_by_account_id(&self, account_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM admin_grants WHERE account_id = ?")
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to delete admin grant: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<AdminGrant>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, account_id, granted_by, created_at FROM admin_grants \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| internal(format!("Failed to list admin grants: {}", e)))?;

        rows.iter().map(Self::row_to_grant).collect()
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}
