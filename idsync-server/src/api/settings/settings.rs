//! Settings REST API handlers
//!
//! Reads return the merged bundle; writes go through the engine's
//! authorize-before-write path and respond with the fresh bundle.

use crate::{Actor, ApiResult, SettingsBundleResponse, SettingsQuery, UpdateSettingsRequest};
use crate::state::AppState;

use idsync_engine::SettingsUpdate;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /settings
///
/// The caller's merged settings view.
pub async fn read_settings(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Query(query): Query<SettingsQuery>,
) -> ApiResult<Json<SettingsBundleResponse>> {
    let bundle = state
        .settings
        .read(&actor, query.organization_id.as_deref())
        .await?;

    Ok(Json(bundle.into()))
}

/// PUT /settings
///
/// Apply a settings write and return the resulting merged view.
pub async fn write_settings(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsBundleResponse>> {
    let organization_id = req.organization_id;

    state
        .settings
        .write(
            &actor,
            organization_id.as_deref(),
            SettingsUpdate {
                user_settings: req.user_settings,
                org_settings: req.org_settings,
            },
        )
        .await?;

    let bundle = state
        .settings
        .read(&actor, organization_id.as_deref())
        .await?;

    Ok(Json(bundle.into()))
}
