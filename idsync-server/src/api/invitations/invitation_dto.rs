use idsync_core::OrgInvitation;

use serde::Serialize;

/// Pending invitation DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDto {
    pub id: String,
    pub organization_id: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl From<OrgInvitation> for InvitationDto {
    fn from(i: OrgInvitation) -> Self {
        Self {
            id: i.id,
            organization_id: i.organization_id,
            email: i.email,
            role: i.role,
            status: i.status,
        }
    }
}
