use crate::models::profile::Profile;

use serde::Serialize;

/// Settings are schemaless JSON objects; keys are application-defined.
pub type SettingsMap = serde_json::Map<String, serde_json::Value>;

/// Merged view returned by a settings read: the caller's profile plus
/// both settings scopes. Absent scopes come back as empty objects.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsBundle {
    pub profile: Profile,
    pub user_settings: SettingsMap,
    pub org_settings: SettingsMap,
}
