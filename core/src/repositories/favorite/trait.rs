//! Favorite repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoriteCar;
use crate::errors::DomainError;

/// Repository trait for favorite-car persistence, unique per
/// `(account_id, car_id)`
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Save a favorite. Returns the existing entry unchanged when the
    /// account already favorited the car.
    async fn add(&self, favorite: FavoriteCar) -> Result<FavoriteCar, DomainError>;

    /// Remove a favorite; `Ok(false)` when there was nothing to remove
    async fn remove(&self, account_id: Uuid, car_id: &str) -> Result<bool, DomainError>;

    /// List an account's favorites, newest first
    async fn list_by_account(&self, account_id: Uuid) -> Result<Vec<FavoriteCar>, DomainError>;

    /// Check whether an account favorited a car
    async fn exists(&self, account_id: Uuid, car_id: &str) -> Result<bool, DomainError>;

    /// Just the car ids of an account's favorites
    async fn car_ids(&self, account_id: Uuid) -> Result<Vec<String>, DomainError>;
}
