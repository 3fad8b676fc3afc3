use crate::error::Result as ProviderResult;
use crate::types::{CreateInvitationParams, CreateOrganizationParams};

use idsync_core::{Identity, OrgInvitation, OrgMembership, Organization};

use async_trait::async_trait;

/// Typed surface of the identity provider's backend API.
///
/// [`crate::ProviderClient`] is the production implementation; engine and
/// resolver tests substitute in-memory fakes.
#[async_trait]
pub trait ProviderApi: Send + Sync {
    /// Fetch the current state of a user. `NotFound` when the provider
    /// no longer knows the user.
    async fn fetch_user(&self, user_id: &str) -> ProviderResult<Identity>;

    async fn create_organization(
        &self,
        params: CreateOrganizationParams,
    ) -> ProviderResult<Organization>;

    /// List up to `limit` memberships of an organization, in the
    /// provider's listing order.
    async fn list_memberships(
        &self,
        organization_id: &str,
        limit: u32,
    ) -> ProviderResult<Vec<OrgMembership>>;

    async fn create_invitation(
        &self,
        organization_id: &str,
        params: CreateInvitationParams,
    ) -> ProviderResult<OrgInvitation>;

    async fn update_membership_role(
        &self,
        organization_id: &str,
        membership_id: &str,
        role: &str,
    ) -> ProviderResult<OrgMembership>;

    async fn delete_membership(
        &self,
        organization_id: &str,
        membership_id: &str,
    ) -> ProviderResult<()>;
}
