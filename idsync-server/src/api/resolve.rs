//! Organization scope resolution for request handlers

use crate::ApiError;

use idsync_core::ActorContext;

use std::panic::Location;

use error_location::ErrorLocation;

/// Resolve the organization an operation targets.
///
/// An explicit `organizationId` from the request wins; otherwise the
/// token's active organization applies. Handlers whose operation cannot
/// proceed without an organization call this; operations where the scope
/// is genuinely optional pass the raw option through instead.
pub fn require_organization<'a>(
    actor: &'a ActorContext,
    explicit: Option<&'a str>,
) -> Result<&'a str, ApiError> {
    actor
        .resolve_org(explicit)
        .ok_or_else(|| ApiError::Validation {
            message: "organization context required: pass organizationId or use a session \
                      with an active organization"
                .to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
