use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnerRequest {
    /// Member receiving the owner role (required)
    pub new_owner_user_id: String,

    #[serde(default)]
    pub organization_id: Option<String>,
}
