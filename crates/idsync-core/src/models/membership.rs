use crate::models::capability::CapabilityClass;

use serde::{Deserialize, Serialize};

/// An organization membership as reported by the identity provider.
/// The provider owns this record; we never persist it locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMembership {
    /// Provider-assigned membership id, distinct from the user id.
    pub id: String,
    pub organization_id: String,
    pub user_id: String,
    pub role: String,
}

impl OrgMembership {
    pub fn capability(&self) -> CapabilityClass {
        CapabilityClass::from_role(&self.role)
    }
}
