//! Invitation REST API handler
//!
//! Invitations are created in the provider and never stored locally;
//! the provider emails the invitee and reports acceptance through
//! identity events.

use crate::state::AppState;
use crate::{Actor, ApiError, ApiResult, InvitationResponse, InviteUserRequest};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /invite-user
///
/// Invite an email address into an organization. Admin only.
pub async fn invite_user(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<InviteUserRequest>,
) -> ApiResult<Json<InvitationResponse>> {
    let organization_id = req.organization_id.trim();
    if organization_id.is_empty() {
        return Err(ApiError::Validation {
            message: "organizationId must not be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let invitation = state
        .membership
        .invite(
            &actor,
            organization_id,
            &req.email_address,
            req.role.as_deref(),
        )
        .await?;

    log::info!(
        "Invited {} to organization {} as {} (by {})",
        invitation.email,
        invitation.organization_id,
        invitation.role,
        actor.external_user_id
    );

    Ok(Json(InvitationResponse {
        invitation: invitation.into(),
    }))
}
