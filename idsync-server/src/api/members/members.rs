//! Membership administration REST API handlers
//!
//! The provider stays authoritative for memberships; these handlers
//! delegate to the membership service and only shape requests and
//! responses.

use crate::api::resolve::require_organization;
use crate::{
    Actor, ApiResult, MemberDto, MemberListQuery, MemberListResponse, MemberResponse,
    RemovalResponse, RemoveMemberRequest, TransferOwnerRequest, TransferOwnerResponse,
    UpdateRoleRequest,
};
use crate::state::AppState;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /org-members
///
/// List an organization's memberships. Any member may list.
pub async fn list_members(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Query(query): Query<MemberListQuery>,
) -> ApiResult<Json<MemberListResponse>> {
    let organization_id = require_organization(&actor, query.organization_id.as_deref())?;

    let members = state.membership.list_members(&actor, organization_id).await?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MemberDto::from).collect(),
    }))
}

/// PUT /org-members
///
/// Change a member's provider role. Admin only.
pub async fn update_member_role(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<UpdateRoleRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let organization_id = require_organization(&actor, req.organization_id.as_deref())?;

    let member = state
        .membership
        .update_role(&actor, organization_id, &req.membership_id, &req.role)
        .await?;

    Ok(Json(MemberResponse {
        member: member.into(),
    }))
}

/// DELETE /org-members
///
/// End a membership: admin removal by membership id, or self-service
/// leave by the caller's own user id.
pub async fn remove_member(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<RemoveMemberRequest>,
) -> ApiResult<Json<RemovalResponse>> {
    let organization_id = require_organization(&actor, req.organization_id.as_deref())?;

    let kind = state
        .membership
        .remove(
            &actor,
            organization_id,
            req.membership_id.as_deref(),
            req.target_user_id.as_deref(),
        )
        .await?;

    Ok(Json(RemovalResponse {
        outcome: kind.as_str().to_string(),
    }))
}

/// POST /transfer-owner
///
/// Hand the owner role to another member and step the caller down to
/// plain admin.
pub async fn transfer_owner(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<TransferOwnerRequest>,
) -> ApiResult<Json<TransferOwnerResponse>> {
    let organization_id = require_organization(&actor, req.organization_id.as_deref())?;

    state
        .membership
        .transfer_ownership(&actor, organization_id, &req.new_owner_user_id)
        .await?;

    Ok(Json(TransferOwnerResponse {
        organization_id: organization_id.to_string(),
        new_owner_user_id: req.new_owner_user_id,
    }))
}
