use crate::models::identity::Identity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to newly provisioned profiles. Application-internal,
/// distinct from the provider's organization roles.
pub const DEFAULT_ROLE: &str = "viewer";

/// Local mirror of a provider user, keyed by the provider's user id.
///
/// The mirrored columns (email, names, avatar) are overwritten wholesale on
/// every sync. `role`, `is_active` and `created_at` are application-owned
/// and survive re-syncs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub external_id: String,

    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,

    pub role: String,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a fresh profile from a provider snapshot with application
    /// defaults for the locally-owned fields.
    pub fn from_identity(identity: &Identity) -> Self {
        let now = Utc::now();
        Self {
            external_id: identity.external_id.clone(),
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            avatar_url: identity.avatar_url.clone(),
            role: DEFAULT_ROLE.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
