//! MySQL implementation of the ProfileRepository trait.
//!
//! Single-use credential consumption is implemented as a conditional
//! `UPDATE ... WHERE <token column> = ?`; the affected-row count decides
//! the winner when two requests race for the same token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::profile::Profile;
use mr_core::errors::DomainError;
use mr_core::repositories::ProfileRepository;

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Profile entity
    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<Profile, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| internal(format!("Failed to get id: {}", e)))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| internal(format!("Failed to get account_id: {}", e)))?;

        Ok(Profile {
            id: Uuid::parse_str(&id)
                .map_err(|e| internal(format!("Invalid profile UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| internal(format!("Invalid account UUID: {}", e)))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| internal(format!("Failed to get phone_number: {}", e)))?,
            phone_verified: row
                .try_get("phone_verified")
                .map_err(|e| internal(format!("Failed to get phone_verified: {}", e)))?,
            email_verified: row
                .try_get("email_verified")
                .map_err(|e| internal(format!("Failed to get email_verified: {}", e)))?,
            verification_token: row
                .try_get("verification_token")
                .map_err(|e| internal(format!("Failed to get verification_token: {}", e)))?,
            verification_code: row
                .try_get("verification_code")
                .map_err(|e| internal(format!("Failed to get verification_code: {}", e)))?,
            verification_code_created_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verification_code_created_at")
                .map_err(|e| {
                    internal(format!("Failed to get verification_code_created_at: {}", e))
                })?,
            phone_verification_code: row
                .try_get("phone_verification_code")
                .map_err(|e| internal(format!("Failed to get phone_verification_code: {}", e)))?,
            phone_verification_code_created_at: row
                .try_get::<Option<DateTime<Utc>>, _>("phone_verification_code_created_at")
                .map_err(|e| {
                    internal(format!(
                        "Failed to get phone_verification_code_created_at: {}",
                        e
                    ))
                })?,
            reset_token: row
                .try_get("reset_token")
                .map_err(|e| internal(format!("Failed to get reset_token: {}", e)))?,
            reset_token_created_at: row
                .try_get::<Option<DateTime<Utc>>, _>("reset_token_created_at")
                .map_err(|e| internal(format!("Failed to get reset_token_created_at: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn find_one_where(
        &self,
        condition: &str,
        value: &str,
    ) -> Result<Option<Profile>, DomainError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE {} = ? LIMIT 1",
            PROFILE_COLUMNS, condition
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to find profile: {}", e)))?;

        result.map(|row| Self::row_to_profile(&row)).transpose()
    }
}

const PROFILE_COLUMNS: &str = "id, account_id, phone_number, phone_verified, email_verified, \
                               verification_token, verification_code, \
                               verification_code_created_at, phone_verification_code, \
                               phone_verification_code_created_at, reset_token, \
                               reset_token_created_at, created_at, updated_at";

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError> {
        self.find_one_where("account_id", &account_id.to_string()).await
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Profile>, DomainError> {
        self.find_one_where("verification_token", token).await
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<Profile>, DomainError> {
        self.find_one_where("reset_token", token).await
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            INSERT INTO profiles (
                id, account_id, phone_number, phone_verified, email_verified,
                verification_token, verification_code, verification_code_created_at,
                phone_verification_code, phone_verification_code_created_at,
                reset_token, reset_token_created_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(profile.id.to_string())
            .bind(profile.account_id.to_string())
            .bind(&profile.phone_number)
            .bind(profile.phone_verified)
            .bind(profile.email_verified)
            .bind(&profile.verification_token)
            .bind(&profile.verification_code)
            .bind(profile.verification_code_created_at)
            .bind(&profile.phone_verification_code)
            .bind(profile.phone_verification_code_created_at)
            .bind(&profile.reset_token)
            .bind(profile.reset_token_created_at)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Validation {
                        message: "Account already has a profile".to_string(),
                    }
                }
                e => internal(format!("Failed to create profile: {}", e)),
            })?;

        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            UPDATE profiles SET
                phone_number = ?, phone_verified = ?, email_verified = ?,
                verification_token = ?, verification_code = ?,
                verification_code_created_at = ?, phone_verification_code = ?,
                phone_verification_code_created_at = ?, reset_token = ?,
                reset_token_created_at = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&profile.phone_number)
            .bind(profile.phone_verified)
            .bind(profile.email_verified)
            .bind(&profile.verification_token)
            .bind(&profile.verification_code)
            .bind(profile.verification_code_created_at)
            .bind(&profile.phone_verification_code)
            .bind(profile.phone_verification_code_created_at)
            .bind(&profile.reset_token)
            .bind(profile.reset_token_created_at)
            .bind(profile.updated_at)
            .bind(profile.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Profile".to_string(),
            });
        }

        Ok(profile)
    }

    async fn consume_verification_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE profiles SET
                email_verified = TRUE,
                verification_token = NULL,
                verification_code = NULL,
                verification_code_created_at = NULL,
                updated_at = ?
            WHERE id = ? AND verification_token = ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(profile_id.to_string())
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to consume verification token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn consume_reset_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE profiles SET
                reset_token = NULL,
                reset_token_created_at = NULL,
                updated_at = ?
            WHERE id = ? AND reset_token = ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(profile_id.to_string())
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to consume reset token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}
