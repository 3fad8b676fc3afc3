use idsync_core::SettingsMap;

use serde::Deserialize;

/// Settings write. At least one scope must be present; the engine
/// rejects an update that carries neither.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub user_settings: Option<SettingsMap>,

    #[serde(default)]
    pub org_settings: Option<SettingsMap>,

    #[serde(default)]
    pub organization_id: Option<String>,
}
