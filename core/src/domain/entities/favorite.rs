//! Favorite car entity.
//!
//! Car listings live in an external catalog; a favorite stores the listing
//! id plus a denormalized snapshot for display without a catalog round trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car listing saved to an account's favorites list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCar {
    /// Unique identifier for the favorite entry
    pub id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// External car listing id
    pub car_id: String,

    /// Listing title snapshot
    pub car_title: Option<String>,

    /// Listing price snapshot
    pub car_price: Option<f64>,

    /// Listing image URL snapshot
    pub car_image_url: Option<String>,

    /// Timestamp when the favorite was saved
    pub created_at: DateTime<Utc>,
}

impl FavoriteCar {
    /// Creates a new favorite entry
    pub fn new(
        account_id: Uuid,
        car_id: String,
        car_title: Option<String>,
        car_price: Option<f64>,
        car_image_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            car_id,
            car_title,
            car_price,
            car_image_url,
            created_at: Utc::now(),
        }
    }
}
