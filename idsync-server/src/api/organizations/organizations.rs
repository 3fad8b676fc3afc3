//! Organization REST API handler
//!
//! Creates the organization in the provider and records the mapping
//! row that later authorizes org-scoped settings writes.

use crate::state::AppState;
use crate::{Actor, ApiResult, CreateOrganizationRequest, OrganizationResponse};

use axum::{Json, extract::State};

/// POST /create-organization
///
/// Create a provider organization with the caller as its first owner.
pub async fn create_organization(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<CreateOrganizationRequest>,
) -> ApiResult<Json<OrganizationResponse>> {
    let organization = state
        .organizations
        .create(&actor, &req.name, &req.slug)
        .await?;

    log::info!(
        "Created organization {} ({}) for {}",
        organization.id,
        organization.slug,
        actor.external_user_id
    );

    Ok(Json(OrganizationResponse {
        organization: organization.into(),
    }))
}
