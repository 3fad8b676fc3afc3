use serde::{Deserialize, Serialize};

/// A pending organization invitation held by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgInvitation {
    pub id: String,
    pub organization_id: String,
    pub email: String,
    pub role: String,
    pub status: String,
}
