//! Request and response data-transfer objects.

pub mod admin;
pub mod auth;
pub mod favorites;
pub mod profile;
