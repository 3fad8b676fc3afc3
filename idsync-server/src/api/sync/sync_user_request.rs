use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncUserRequest {
    /// Provider user id to reconcile (required)
    pub external_user_id: String,
}
