//! Mock implementation of FavoriteRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoriteCar;
use crate::errors::DomainError;

use super::trait_::FavoriteRepository;

/// Mock favorite repository for testing
#[derive(Default)]
pub struct MockFavoriteRepository {
    favorites: Arc<RwLock<HashMap<Uuid, FavoriteCar>>>,
}

impl MockFavoriteRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            favorites: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn add(&self, favorite: FavoriteCar) -> Result<FavoriteCar, DomainError> {
        let mut favorites = self.favorites.write().await;

        if let Some(existing) = favorites
            .values()
            .find(|f| f.account_id == favorite.account_id && f.car_id == favorite.car_id)
        {
            return Ok(existing.clone());
        }

        favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn remove(&self, account_id: Uuid, car_id: &str) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        let id = favorites
            .values()
            .find(|f| f.account_id == account_id && f.car_id == car_id)
            .map(|f| f.id);

        match id {
            Some(id) => {
                favorites.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_by_account(&self, account_id: Uuid) -> Result<Vec<FavoriteCar>, DomainError> {
        let favorites = self.favorites.read().await;
        let mut result: Vec<FavoriteCar> = favorites
            .values()
            .filter(|f| f.account_id == account_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn exists(&self, account_id: Uuid, car_id: &str) -> Result<bool, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .any(|f| f.account_id == account_id && f.car_id == car_id))
    }

    async fn car_ids(&self, account_id: Uuid) -> Result<Vec<String>, DomainError> {
        let list = self.list_by_account(account_id).await?;
        Ok(list.into_iter().map(|f| f.car_id).collect())
    }
}
