use serde::Serialize;

/// Confirmation of a completed ownership transfer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnerResponse {
    pub organization_id: String,
    pub new_owner_user_id: String,
}
