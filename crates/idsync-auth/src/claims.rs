use crate::{AuthError, Result as AuthErrorResult};

use idsync_core::ActorContext;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims as the identity provider mints session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the provider's user id
    pub sub: String,
    /// Active organization of the session, when one is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 256 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref org_id) = self.org_id {
            if org_id.is_empty() {
                return Err(AuthError::InvalidClaim {
                    claim: "org_id".to_string(),
                    message: "org_id cannot be empty when present".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if org_id.len() > 128 {
                return Err(AuthError::InvalidClaim {
                    claim: "org_id".to_string(),
                    message: "org_id exceeds maximum length".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// Actor identity these claims establish
    pub fn actor(&self) -> ActorContext {
        ActorContext::new(self.sub.clone(), self.org_id.clone())
    }
}
