use crate::error::{CoreError, Result as CoreResult};
use crate::models::identity::Identity;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity lifecycle events this service consumes. The provider emits
/// more kinds; everything else is acknowledged and ignored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityEventKind {
    UserCreated,
    UserUpdated,
    UserDeleted,
}

impl IdentityEventKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::UserCreated => "user.created",
            Self::UserUpdated => "user.updated",
            Self::UserDeleted => "user.deleted",
        }
    }
}

impl FromStr for IdentityEventKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "user.created" => Ok(Self::UserCreated),
            "user.updated" => Ok(Self::UserUpdated),
            "user.deleted" => Ok(Self::UserDeleted),
            _ => Err(CoreError::InvalidEventKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// The state change a verified event describes. Creation and update
/// carry a full snapshot; deletion only names the user.
#[derive(Debug, Clone)]
pub enum IdentityChange {
    Created(Identity),
    Updated(Identity),
    Deleted { external_id: String },
}

/// A verified identity event ready for reconciliation.
#[derive(Debug, Clone)]
pub struct IdentityEvent {
    /// Provider-assigned delivery id, stable across redeliveries.
    pub delivery_id: String,
    pub change: IdentityChange,
}

impl IdentityEvent {
    pub fn created(delivery_id: impl Into<String>, identity: Identity) -> Self {
        Self {
            delivery_id: delivery_id.into(),
            change: IdentityChange::Created(identity),
        }
    }

    pub fn updated(delivery_id: impl Into<String>, identity: Identity) -> Self {
        Self {
            delivery_id: delivery_id.into(),
            change: IdentityChange::Updated(identity),
        }
    }

    pub fn deleted(delivery_id: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            delivery_id: delivery_id.into(),
            change: IdentityChange::Deleted {
                external_id: external_id.into(),
            },
        }
    }

    pub fn kind(&self) -> IdentityEventKind {
        match self.change {
            IdentityChange::Created(_) => IdentityEventKind::UserCreated,
            IdentityChange::Updated(_) => IdentityEventKind::UserUpdated,
            IdentityChange::Deleted { .. } => IdentityEventKind::UserDeleted,
        }
    }

    pub fn external_id(&self) -> &str {
        match &self.change {
            IdentityChange::Created(identity) | IdentityChange::Updated(identity) => {
                &identity.external_id
            }
            IdentityChange::Deleted { external_id } => external_id,
        }
    }
}
