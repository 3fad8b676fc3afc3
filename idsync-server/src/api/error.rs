//! REST API error types
//!
//! Every failure leaves the server as `{"error": "<message>"}` with a
//! status from the taxonomy: validation 400, unauthorized 401, forbidden
//! 403, not found 404, upstream 502, internal 500.

use idsync_auth::AuthError;
use idsync_db::DbError;
use idsync_engine::{EngineError, SyncError};
use idsync_provider::{ProviderError, WebhookError};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request data (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// No authenticated caller (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but lacking the required capability (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Referenced entity absent where required (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Provider or datastore call failed (502)
    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, message),
            ApiError::Forbidden { message, .. } => (StatusCode::FORBIDDEN, message),
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::Upstream { message, .. } => (StatusCode::BAD_GATEWAY, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert engine errors to API errors
impl From<EngineError> for ApiError {
    #[track_caller]
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            EngineError::Forbidden { message, .. } => ApiError::Forbidden {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            EngineError::NotFound { message, .. } => ApiError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            EngineError::Provider { source, .. } => ApiError::from(source),
            EngineError::Datastore { source, .. } => ApiError::from(source),
            EngineError::Auth { source, .. } => ApiError::from(source),
            EngineError::TransferIncomplete {
                organization_id,
                new_owner,
                source,
                ..
            } => {
                // Partial state must reach the caller, not hide behind a
                // generic upstream message
                log::error!(
                    "Ownership transfer incomplete: org={} new_owner={}: {}",
                    organization_id,
                    new_owner,
                    source
                );
                ApiError::Upstream {
                    message: format!(
                        "ownership transfer incomplete: {} now holds the owner role \
                         but demoting the previous owner failed; retry or fix manually",
                        new_owner
                    ),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert reconciliation errors to API errors
impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::ProviderFetch {
                external_id,
                source: ProviderError::NotFound { .. },
                ..
            } => ApiError::NotFound {
                message: format!("provider has no user {}", external_id),
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::ProviderFetch {
                external_id,
                source,
                ..
            } => {
                log::error!("Provider fetch failed: user={}: {}", external_id, source);
                ApiError::Upstream {
                    message: format!("provider fetch failed for user {}", external_id),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            SyncError::DatastoreWrite {
                external_id,
                source,
                ..
            } => {
                log::error!("Datastore write failed: user={}: {}", external_id, source);
                ApiError::Upstream {
                    message: format!("datastore write failed for user {}", external_id),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert provider errors to API errors
impl From<ProviderError> for ApiError {
    #[track_caller]
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::NotFound { resource, .. } => ApiError::NotFound {
                message: format!("provider has no {}", resource),
                location: ErrorLocation::from(Location::caller()),
            },
            ProviderError::Api { status, message, .. } => ApiError::Upstream {
                message: format!("provider call failed (status {}): {}", status, message),
                location: ErrorLocation::from(Location::caller()),
            },
            ProviderError::Http { message, .. } => ApiError::Upstream {
                message: format!("provider unreachable: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Upstream {
            message: "datastore operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let message = match e {
            AuthError::Upstream { source, .. } => return ApiError::from(source),
            AuthError::TokenExpired { .. } => "token expired".to_string(),
            AuthError::MissingHeader { .. } => "missing authorization header".to_string(),
            AuthError::InvalidScheme { .. } => {
                "authorization scheme must be Bearer".to_string()
            }
            AuthError::JwtDecode { .. } => "invalid token".to_string(),
            AuthError::InvalidToken { message, .. } => message,
            AuthError::InvalidClaim { claim, message, .. } => {
                format!("invalid claim '{}': {}", claim, message)
            }
        };

        ApiError::Unauthorized {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert webhook verification errors to API errors
impl From<WebhookError> for ApiError {
    #[track_caller]
    fn from(e: WebhookError) -> Self {
        match e {
            WebhookError::MalformedTimestamp { value, .. } => ApiError::Validation {
                message: format!("webhook-timestamp is not a unix timestamp: {:?}", value),
                location: ErrorLocation::from(Location::caller()),
            },
            WebhookError::MalformedPayload { message, .. } => ApiError::Validation {
                message: format!("webhook payload is not valid: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
            WebhookError::StaleTimestamp {
                skew_secs,
                tolerance_secs,
                ..
            } => ApiError::Unauthorized {
                message: format!(
                    "webhook timestamp outside tolerance: skewed {}s, allowed {}s",
                    skew_secs, tolerance_secs
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            WebhookError::SignatureMismatch { .. } => ApiError::Unauthorized {
                message: "webhook signature does not match payload".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            WebhookError::InvalidSecret { .. } => ApiError::Internal {
                message: "webhook verifier misconfigured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
