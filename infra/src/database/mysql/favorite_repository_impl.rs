//! MySQL implementation of the FavoriteRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::favorite::FavoriteCar;
use mr_core::errors::DomainError;
use mr_core::repositories::FavoriteRepository;

/// MySQL implementation of FavoriteRepository
pub struct MySqlFavoriteRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    /// Create a new MySQL favorite repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to FavoriteCar entity
    fn row_to_favorite(row: &sqlx::mysql::MySqlRow) -> Result<FavoriteCar, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| internal(format!("Failed to get id: {}", e)))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| internal(format!("Failed to get account_id: {}", e)))?;

        Ok(FavoriteCar {
            id: Uuid::parse_str(&id)
                .map_err(|e| internal(format!("Invalid favorite UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| internal(format!("Invalid account UUID: {}", e)))?,
            car_id: row
                .try_get("car_id")
                .map_err(|e| internal(format!("Failed to get car_id: {}", e)))?,
            car_title: row
                .try_get("car_title")
                .map_err(|e| internal(format!("Failed to get car_title: {}", e)))?,
            car_price: row
                .try_get("car_price")
                .map_err(|e| internal(format!("Failed to get car_price: {}", e)))?,
            car_image_url: row
                .try_get("car_image_url")
                .map_err(|e| internal(format!("Failed to get car_image_url: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

const FAVORITE_COLUMNS: &str =
    "id, account_id, car_id, car_title, car_price, car_image_url, created_at";

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn add(&self, favorite: FavoriteCar) -> Result<FavoriteCar, DomainError> {
        // Unique (account_id, car_id) index makes the duplicate insert a
        // no-op; return the stored row either way
        let query = r#"
            INSERT IGNORE INTO favorites (
                id, account_id, car_id, car_title, car_price, car_image_url, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(favorite.id.to_string())
            .bind(favorite.account_id.to_string())
            .bind(&favorite.car_id)
            .bind(&favorite.car_title)
            .bind(favorite.car_price)
            .bind(&favorite.car_image_url)
            .bind(favorite.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to save favorite: {}", e)))?;

        let select = format!(
            "SELECT {} FROM favorites WHERE account_id = ? AND car_id = ? LIMIT 1",
            FAVORITE_COLUMNS
        );
        let row = sqlx::query(&select)
            .bind(favorite.account_id.to_string())
            .bind(&favorite.car_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to load favorite: {}", e)))?;

        Self::row_to_favorite(&row)
    }

    async fn remove(&self, account_id: Uuid, car_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM favorites WHERE account_id = ? AND car_id = ?")
            .bind(account_id.to_string())
            .bind(car_id)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to remove favorite: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_account(&self, account_id: Uuid) -> Result<Vec<FavoriteCar>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE account_id = ? ORDER BY created_at DESC",
            FAVORITE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(account_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to list favorites: {}", e)))?;

        rows.iter().map(Self::row_to_favorite).collect()
    }

    async fn exists(&self, account_id: Uuid, car_id: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE account_id = ? AND car_id = ?) AS found",
        )
        .bind(account_id.to_string())
        .bind(car_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| internal(format!("Failed to check favorite: {}", e)))?;

        let found: i8 = row
            .try_get("found")
            .map_err(|e| internal(format!("Failed to get existence result: {}", e)))?;
        Ok(found == 1)
    }

    async fn car_ids(&self, account_id: Uuid) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query(
            "SELECT car_id FROM favorites WHERE account_id = ? ORDER BY created_at DESC",
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| internal(format!("Failed to list favorite ids: {}", e)))?;

        rows.iter()
            .map(|row| {
                row.try_get("car_id")
                    .map_err(|e| internal(format!("Failed to get car_id: {}", e)))
            })
            .collect()
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}
