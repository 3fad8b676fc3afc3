use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    /// Membership to modify (required)
    pub membership_id: String,

    /// New provider role (required)
    pub role: String,

    #[serde(default)]
    pub organization_id: Option<String>,
}
