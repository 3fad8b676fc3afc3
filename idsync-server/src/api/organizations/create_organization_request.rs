use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    /// Display name (required, non-empty)
    pub name: String,

    /// URL-safe slug (required, lowercase alphanumeric with hyphens)
    pub slug: String,
}
