//! Admin panel DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mr_core::domain::entities::admin::AdminGrant;

/// Query parameter identifying the acting admin
#[derive(Debug, Deserialize)]
pub struct ActorQuery {
    pub actor_id: Uuid,
}

/// Request body for POST /admin/admins
#[derive(Debug, Deserialize)]
pub struct GrantAdminRequest {
    pub actor_id: Uuid,
    pub account_id: Uuid,
}

/// An admin grant in API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminGrantResponse {
    pub account_id: Uuid,
    pub granted_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<AdminGrant> for AdminGrantResponse {
    fn from(grant: AdminGrant) -> Self {
        Self {
            account_id: grant.account_id,
            granted_by: grant.granted_by,
            created_at: grant.created_at,
        }
    }
}
