use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a user as the identity provider reports it.
///
/// Everything except the id is optional: the provider allows accounts with
/// no email, no name, and no avatar. The primary email (first in the
/// provider's list) is the one mirrored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub external_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl Identity {
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            email: None,
            first_name: None,
            last_name: None,
            avatar_url: None,
        }
    }
}
