//! On-demand sync REST API handler

use crate::{Actor, ApiError, ApiResult, ProfileResponse, SyncUserRequest};
use crate::state::AppState;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /sync-user
///
/// Fetch the named user's current provider state and force the local
/// mirror to match it. Returns the stored profile.
pub async fn sync_user(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<SyncUserRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let external_user_id = req.external_user_id.trim();
    if external_user_id.is_empty() {
        return Err(ApiError::Validation {
            message: "externalUserId must not be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let profile = state.reconciliation.sync_on_demand(external_user_id).await?;

    log::info!(
        "On-demand sync via REST: user={} by={}",
        external_user_id,
        actor.external_user_id
    );

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}
