//! Business services containing domain logic and use cases.

pub mod account;
pub mod admin;
pub mod favorites;
pub mod notification;
pub mod password_reset;
pub mod verification;

// Re-export commonly used types
pub use account::{AccountService, ContactUpdate, NewAccount, ResendOutcome};
pub use admin::AdminService;
pub use favorites::{FavoriteService, SaveFavorite};
pub use notification::{EmailGateway, SmsGateway};
pub use password_reset::{PasswordResetService, PasswordResetServiceConfig};
pub use verification::{IssuedCredential, VerificationService, VerificationServiceConfig};
