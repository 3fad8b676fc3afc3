use serde::{Deserialize, Serialize};

/// The authenticated caller of an operation, as established from verified
/// token claims. Identities are always provider-side ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorContext {
    pub external_user_id: String,
    /// Active organization from the token, when the session has one.
    pub organization_id: Option<String>,
}

impl ActorContext {
    pub fn new(external_user_id: impl Into<String>, organization_id: Option<String>) -> Self {
        Self {
            external_user_id: external_user_id.into(),
            organization_id,
        }
    }

    /// Organization scope for a request: an explicit parameter wins,
    /// otherwise the token's active organization applies.
    pub fn resolve_org<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.organization_id.as_deref())
    }
}
