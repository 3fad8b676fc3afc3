use std::panic::Location;

use error_location::ErrorLocation;
use idsync_auth::AuthError;
use idsync_core::CoreError;
use idsync_db::DbError;
use idsync_provider::ProviderError;
use thiserror::Error;

/// Failures while mirroring identity state into the datastore. The two
/// variants separate "the provider could not tell us" from "we could
/// not store it", which callers report differently.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Provider fetch failed for user {external_id}: {source} {location}")]
    ProviderFetch {
        external_id: String,
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Datastore write failed for user {external_id}: {source} {location}")]
    DatastoreWrite {
        external_id: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl SyncError {
    #[track_caller]
    pub fn provider_fetch(external_id: impl Into<String>, source: ProviderError) -> Self {
        Self::ProviderFetch {
            external_id: external_id.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn datastore_write(external_id: impl Into<String>, source: DbError) -> Self {
        Self::DatastoreWrite {
            external_id: external_id.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider call failed: {source} {location}")]
    Provider {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Datastore operation failed: {source} {location}")]
    Datastore {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Capability resolution failed: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    /// The promote write landed but the demote write did not, so the
    /// organization briefly has two owners. Callers must say so.
    #[error(
        "Ownership transfer incomplete for organization {organization_id}: \
         {new_owner} was promoted but demoting the previous owner failed: {source} {location}"
    )]
    TransferIncomplete {
        organization_id: String,
        new_owner: String,
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },
}

impl EngineError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transfer_incomplete(
        organization_id: impl Into<String>,
        new_owner: impl Into<String>,
        source: ProviderError,
    ) -> Self {
        Self::TransferIncomplete {
            organization_id: organization_id.into(),
            new_owner: new_owner.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProviderError> for EngineError {
    #[track_caller]
    fn from(source: ProviderError) -> Self {
        Self::Provider {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for EngineError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Datastore {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for EngineError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for EngineError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let message = match source {
            CoreError::Validation { message, .. } => message,
            CoreError::InvalidEventKind { value, .. } => {
                format!("unrecognized event kind: {value}")
            }
        };
        Self::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
