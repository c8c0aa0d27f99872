//! Profile DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use mr_core::domain::entities::account::Account;
use mr_core::domain::entities::profile::Profile;

/// Request body for PUT /profile/{account_id}
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 150))]
    pub first_name: Option<String>,

    #[validate(length(max = 150))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    /// Empty string clears the stored phone number
    pub phone_number: Option<String>,
}

/// Combined account + verification state view
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub account_id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub email_verified: bool,
    pub phone_number: Option<String>,
    pub phone_verified: bool,
}

impl ProfileResponse {
    /// Build the view from the account and its profile
    pub fn from_parts(account: Account, profile: Profile) -> Self {
        Self {
            account_id: account.id,
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            email_verified: profile.email_verified,
            phone_number: profile.phone_number,
            phone_verified: profile.phone_verified,
        }
    }
}
