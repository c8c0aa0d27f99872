//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::account::Account;
use mr_core::errors::DomainError;
use mr_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| internal(format!("Failed to get id: {}", e)))?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| internal(format!("Invalid account UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| internal(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| internal(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| internal(format!("Failed to get password_hash: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| internal(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| internal(format!("Failed to get last_name: {}", e)))?,
            google_linked: row
                .try_get("google_linked")
                .map_err(|e| internal(format!("Failed to get google_linked: {}", e)))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| internal(format!("Failed to get is_active: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| internal(format!("Failed to get updated_at: {}", e)))?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(|e| internal(format!("Failed to get last_login_at: {}", e)))?,
        })
    }
}

const ACCOUNT_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
                               google_linked, is_active, created_at, updated_at, last_login_at";

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE id = ? LIMIT 1", ACCOUNT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to find account by id: {}", e)))?;

        result.map(|row| Self::row_to_account(&row)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE email = ? ORDER BY created_at ASC LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to find account by email: {}", e)))?;

        result.map(|row| Self::row_to_account(&row)).transpose()
    }

    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE email = ?", ACCOUNT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to list accounts by email: {}", e)))?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?) AS found")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to check username: {}", e)))?;

        let found: i8 = row
            .try_get("found")
            .map_err(|e| internal(format!("Failed to get existence result: {}", e)))?;
        Ok(found == 1)
    }

    async fn email_taken_by_other(
        &self,
        email: &str,
        excluding: Uuid,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ? AND id != ?) AS found",
        )
        .bind(email)
        .bind(excluding.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| internal(format!("Failed to check email: {}", e)))?;

        let found: i8 = row
            .try_get("found")
            .map_err(|e| internal(format!("Failed to get existence result: {}", e)))?;
        Ok(found == 1)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, username, email, password_hash, first_name, last_name,
                google_linked, is_active, created_at, updated_at, last_login_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.google_linked)
            .bind(account.is_active)
            .bind(account.created_at)
            .bind(account.updated_at)
            .bind(account.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Validation {
                        message: "Username already taken".to_string(),
                    }
                }
                e => internal(format!("Failed to create account: {}", e)),
            })?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts SET
                username = ?, email = ?, password_hash = ?, first_name = ?,
                last_name = ?, google_linked = ?, is_active = ?, updated_at = ?,
                last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.google_linked)
            .bind(account.is_active)
            .bind(account.updated_at)
            .bind(account.last_login_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to update account: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        Ok(account)
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}
