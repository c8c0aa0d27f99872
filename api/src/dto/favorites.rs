//! Favorites DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use mr_core::domain::entities::favorite::FavoriteCar;

/// Request body for POST /favorites/{account_id}
#[derive(Debug, Deserialize, Validate)]
pub struct AddFavoriteRequest {
    #[validate(length(min = 1, max = 255, message = "Car id is required"))]
    pub car_id: String,

    #[validate(length(max = 255))]
    pub car_title: Option<String>,

    pub car_price: Option<f64>,

    #[validate(url(message = "Invalid image URL"))]
    pub car_image_url: Option<String>,
}

/// A favorite entry in API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub car_id: String,
    pub car_title: Option<String>,
    pub car_price: Option<f64>,
    pub car_image_url: Option<String>,
}

impl From<FavoriteCar> for FavoriteResponse {
    fn from(favorite: FavoriteCar) -> Self {
        Self {
            car_id: favorite.car_id,
            car_title: favorite.car_title,
            car_price: favorite.car_price,
            car_image_url: favorite.car_image_url,
        }
    }
}

/// Response for GET /favorites/{account_id}/ids
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteIdsResponse {
    pub favorite_ids: Vec<String>,
}
