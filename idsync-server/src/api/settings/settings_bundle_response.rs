use crate::ProfileDto;

use idsync_core::{SettingsBundle, SettingsMap};

use serde::Serialize;

/// Merged settings view: the caller's profile plus both scopes.
/// Absent scopes serialize as empty objects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsBundleResponse {
    pub profile: ProfileDto,
    pub user_settings: SettingsMap,
    pub org_settings: SettingsMap,
}

impl From<SettingsBundle> for SettingsBundleResponse {
    fn from(bundle: SettingsBundle) -> Self {
        Self {
            profile: bundle.profile.into(),
            user_settings: bundle.user_settings,
            org_settings: bundle.org_settings,
        }
    }
}
