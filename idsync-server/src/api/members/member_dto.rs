use idsync_core::OrgMembership;

use serde::Serialize;

/// Organization membership DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    /// Provider-assigned membership id, distinct from the user id
    pub id: String,
    pub organization_id: String,
    pub user_id: String,
    pub role: String,
}

impl From<OrgMembership> for MemberDto {
    fn from(m: OrgMembership) -> Self {
        Self {
            id: m.id,
            organization_id: m.organization_id,
            user_id: m.user_id,
            role: m.role,
        }
    }
}
