use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserRequest {
    /// Organization the invitation belongs to (required)
    pub organization_id: String,

    /// Address to invite (required)
    pub email_address: String,

    /// Provider role for the invitee; defaults to the basic member role
    #[serde(default)]
    pub role: Option<String>,
}
