//! Repository interfaces for persistence, plus in-memory mocks for tests.

pub mod account;
pub mod admin;
pub mod favorite;
pub mod profile;

pub use account::{AccountRepository, MockAccountRepository};
pub use admin::{AdminRepository, MockAdminRepository};
pub use favorite::{FavoriteRepository, MockFavoriteRepository};
pub use profile::{MockProfileRepository, ProfileRepository};
