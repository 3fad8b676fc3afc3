use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from calls against the identity provider's API
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider has no {resource} {location}")]
    NotFound {
        resource: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ProviderError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn not_found(resource: impl Into<String>) -> Self {
        ProviderError::NotFound {
            resource: resource.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ProviderError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors from webhook verification and payload parsing
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Webhook secret is not valid base64 {location}")]
    InvalidSecret { location: ErrorLocation },

    #[error("Webhook timestamp is not a unix timestamp: {value:?} {location}")]
    MalformedTimestamp {
        value: String,
        location: ErrorLocation,
    },

    #[error(
        "Webhook timestamp outside tolerance: skewed {skew_secs}s, allowed {tolerance_secs}s {location}"
    )]
    StaleTimestamp {
        skew_secs: i64,
        tolerance_secs: i64,
        location: ErrorLocation,
    },

    #[error("Webhook signature does not match payload {location}")]
    SignatureMismatch { location: ErrorLocation },

    #[error("Webhook payload is not valid: {message} {location}")]
    MalformedPayload {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl WebhookError {
    #[track_caller]
    pub fn invalid_secret() -> Self {
        WebhookError::InvalidSecret {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_timestamp(value: impl Into<String>) -> Self {
        WebhookError::MalformedTimestamp {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stale_timestamp(skew_secs: i64, tolerance_secs: i64) -> Self {
        WebhookError::StaleTimestamp {
            skew_secs,
            tolerance_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn signature_mismatch() -> Self {
        WebhookError::SignatureMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_payload(source: serde_json::Error) -> Self {
        WebhookError::MalformedPayload {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}
