//! Favorites list over externally-hosted car listings.

pub mod service;

pub use service::{FavoriteService, SaveFavorite};
