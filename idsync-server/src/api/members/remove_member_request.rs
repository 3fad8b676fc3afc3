use serde::Deserialize;

/// Membership removal. A membership id addresses any member (admin
/// only); the caller's own user id instead is a self-service leave.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveMemberRequest {
    #[serde(default)]
    pub membership_id: Option<String>,

    #[serde(default)]
    pub target_user_id: Option<String>,

    #[serde(default)]
    pub organization_id: Option<String>,
}
