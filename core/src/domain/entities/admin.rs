//! Admin capability grant.
//!
//! One row per admin account. The grant table is the only source of truth
//! for the admin capability; configuration lists only seed it at startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grants the admin capability to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGrant {
    /// Unique identifier for the grant
    pub id: Uuid,

    /// The account holding the capability
    pub account_id: Uuid,

    /// The admin who issued the grant (None for seeded grants)
    pub granted_by: Option<Uuid>,

    /// Timestamp when the grant was created
    pub created_at: DateTime<Utc>,
}

impl AdminGrant {
    /// Creates a new grant
    pub fn new(account_id: Uuid, granted_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            granted_by,
            created_at: Utc::now(),
        }
    }
}
