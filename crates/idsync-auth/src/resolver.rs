use crate::{AuthError, Result as AuthErrorResult};

use idsync_core::CapabilityClass;
use idsync_provider::ProviderApi;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;

/// Upper bound on memberships fetched per resolution. A member past the
/// first page of a very large organization resolves as `None`.
pub const MEMBERSHIP_PAGE_SIZE: u32 = 200;

/// Resolves a caller's capability inside an organization from the
/// provider's live membership list.
///
/// Resolution reads the provider on every call and caches nothing, so a
/// role change or removal takes effect on the caller's next request.
/// Operations gating several steps of one request resolve once and reuse
/// the class rather than calling again.
#[derive(Clone)]
pub struct AuthorizationResolver {
    provider: Arc<dyn ProviderApi>,
    page_size: u32,
}

impl AuthorizationResolver {
    pub fn new(provider: Arc<dyn ProviderApi>) -> Self {
        Self {
            provider,
            page_size: MEMBERSHIP_PAGE_SIZE,
        }
    }

    pub fn with_page_size(provider: Arc<dyn ProviderApi>, page_size: u32) -> Self {
        Self {
            provider,
            page_size,
        }
    }

    /// Capability of `external_user_id` within `organization_id`:
    /// an admin-spelled role resolves `OrgAdmin`, any other membership
    /// resolves `Member`, no membership resolves `None`.
    pub async fn resolve(
        &self,
        external_user_id: &str,
        organization_id: &str,
    ) -> AuthErrorResult<CapabilityClass> {
        let memberships = self
            .provider
            .list_memberships(organization_id, self.page_size)
            .await
            .map_err(|e| AuthError::Upstream {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let class = memberships
            .iter()
            .find(|m| m.user_id == external_user_id)
            .map(|m| m.capability())
            .unwrap_or(CapabilityClass::None);

        debug!(
            "Capability resolved: user={} org={} class={}",
            external_user_id, organization_id, class
        );

        Ok(class)
    }
}
