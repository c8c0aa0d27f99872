//! # MrMotors Core
//!
//! Core business logic and domain layer for the MrMotors backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, AdminGrant, FavoriteCar, Profile};
pub use errors::{
    AuthError, DeliveryError, DomainError, DomainResult, ResetError, VerificationError,
};
pub use repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
pub use services::{
    AccountService, AdminService, EmailGateway, FavoriteService, PasswordResetService,
    SmsGateway, VerificationService,
};
