pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    events::{event_ack_response::EventAckResponse, events::receive_identity_event},
    extractors::actor::Actor,
    invitations::{
        invitation_dto::InvitationDto,
        invitation_response::InvitationResponse,
        invitations::invite_user,
        invite_user_request::InviteUserRequest,
    },
    members::{
        member_dto::MemberDto,
        member_list_query::MemberListQuery,
        member_list_response::MemberListResponse,
        member_response::MemberResponse,
        members::{list_members, remove_member, transfer_owner, update_member_role},
        removal_response::RemovalResponse,
        remove_member_request::RemoveMemberRequest,
        transfer_owner_request::TransferOwnerRequest,
        transfer_owner_response::TransferOwnerResponse,
        update_role_request::UpdateRoleRequest,
    },
    organizations::{
        create_organization_request::CreateOrganizationRequest,
        organization_dto::OrganizationDto,
        organization_response::OrganizationResponse,
        organizations::create_organization,
    },
    profile_dto::ProfileDto,
    settings::{
        settings::{read_settings, write_settings},
        settings_bundle_response::SettingsBundleResponse,
        settings_query::SettingsQuery,
        update_settings_request::UpdateSettingsRequest,
    },
    sync::{profile_response::ProfileResponse, sync::sync_user, sync_user_request::SyncUserRequest},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
