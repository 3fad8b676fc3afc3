use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsQuery {
    /// Explicit organization scope; falls back to the token's active
    /// organization when absent
    #[serde(default)]
    pub organization_id: Option<String>,
}
