//! Favorite service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoriteCar;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::FavoriteRepository;

/// Data for saving a favorite
#[derive(Debug, Clone)]
pub struct SaveFavorite {
    pub car_id: String,
    pub car_title: Option<String>,
    pub car_price: Option<f64>,
    pub car_image_url: Option<String>,
}

/// Favorites service
pub struct FavoriteService<F>
where
    F: FavoriteRepository,
{
    favorite_repository: Arc<F>,
}

impl<F> FavoriteService<F>
where
    F: FavoriteRepository,
{
    /// Create a new favorites service
    pub fn new(favorite_repository: Arc<F>) -> Self {
        Self {
            favorite_repository,
        }
    }

    /// Save a car to an account's favorites; saving twice is a no-op
    pub async fn add(&self, account_id: Uuid, save: SaveFavorite) -> DomainResult<FavoriteCar> {
        if save.car_id.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Car id is required".to_string(),
            });
        }

        self.favorite_repository
            .add(FavoriteCar::new(
                account_id,
                save.car_id,
                save.car_title,
                save.car_price,
                save.car_image_url,
            ))
            .await
    }

    /// Remove a car from the favorites; `Ok(false)` when it was not saved
    pub async fn remove(&self, account_id: Uuid, car_id: &str) -> DomainResult<bool> {
        self.favorite_repository.remove(account_id, car_id).await
    }

    /// List an account's favorites, newest first
    pub async fn list(&self, account_id: Uuid) -> DomainResult<Vec<FavoriteCar>> {
        self.favorite_repository.list_by_account(account_id).await
    }

    /// Check whether a car is favorited
    pub async fn is_favorite(&self, account_id: Uuid, car_id: &str) -> DomainResult<bool> {
        self.favorite_repository.exists(account_id, car_id).await
    }

    /// Car ids of an account's favorites, for bulk client-side state
    pub async fn ids(&self, account_id: Uuid) -> DomainResult<Vec<String>> {
        self.favorite_repository.car_ids(account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockFavoriteRepository;

    fn service() -> FavoriteService<MockFavoriteRepository> {
        FavoriteService::new(Arc::new(MockFavoriteRepository::new()))
    }

    fn save(car_id: &str) -> SaveFavorite {
        SaveFavorite {
            car_id: car_id.to_string(),
            car_title: Some("2019 Corolla".to_string()),
            car_price: Some(15_990.0),
            car_image_url: None,
        }
    }

    #[tokio::test]
    async fn test_add_list_remove() {
        let service = service();
        let account_id = Uuid::new_v4();

        service.add(account_id, save("car-1")).await.unwrap();
        service.add(account_id, save("car-2")).await.unwrap();

        assert!(service.is_favorite(account_id, "car-1").await.unwrap());
        assert_eq!(service.list(account_id).await.unwrap().len(), 2);

        let mut ids = service.ids(account_id).await.unwrap();
        ids.sort();
        assert_eq!(ids, vec!["car-1".to_string(), "car-2".to_string()]);

        assert!(service.remove(account_id, "car-1").await.unwrap());
        assert!(!service.is_favorite(account_id, "car-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_add_twice_keeps_one_entry() {
        let service = service();
        let account_id = Uuid::new_v4();

        let first = service.add(account_id, save("car-1")).await.unwrap();
        let second = service.add(account_id, save("car-1")).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(service.list(account_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_car_id_rejected() {
        let service = service();
        let result = service.add(Uuid::new_v4(), save("  ")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
