use crate::ApiError;

use idsync_auth::AuthError;
use idsync_db::DbError;
use idsync_engine::{EngineError, SyncError};
use idsync_provider::{ProviderError, WebhookError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "no profile for user_7".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "no profile for user_7");
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::Validation {
        message: "externalUserId must not be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "externalUserId must not be empty");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "token expired".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "admin capability required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_upstream_error_returns_502() {
    let error = ApiError::Upstream {
        message: "provider unreachable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "webhook verifier misconfigured".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_engine_forbidden_converts_to_forbidden() {
    let api_err: ApiError = EngineError::forbidden("admin capability required").into();

    match api_err {
        ApiError::Forbidden { message, .. } => {
            assert_eq!(message, "admin capability required");
        }
        other => panic!("Expected Forbidden, got {other:?}"),
    }
}

#[test]
fn test_sync_provider_not_found_converts_to_404() {
    let sync_err =
        SyncError::provider_fetch("user_42", ProviderError::not_found("user user_42"));
    let api_err: ApiError = sync_err.into();

    match api_err {
        ApiError::NotFound { message, .. } => {
            assert!(message.contains("user_42"));
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_db_error_converts_to_upstream_without_details() {
    let db_err: DbError = sqlx::Error::RowNotFound.into();
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Upstream { message, .. } => {
            assert_eq!(message, "datastore operation failed");
        }
        other => panic!("Expected Upstream, got {other:?}"),
    }
}

#[test]
fn test_missing_auth_header_converts_to_unauthorized() {
    let api_err: ApiError = AuthError::missing_header().into();

    match api_err {
        ApiError::Unauthorized { message, .. } => {
            assert_eq!(message, "missing authorization header");
        }
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_stale_webhook_converts_to_unauthorized() {
    let api_err: ApiError = WebhookError::stale_timestamp(900, 300).into();

    match api_err {
        ApiError::Unauthorized { message, .. } => {
            assert!(message.contains("900"));
            assert!(message.contains("300"));
        }
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_signature_mismatch_converts_to_unauthorized() {
    let api_err: ApiError = WebhookError::signature_mismatch().into();

    assert!(matches!(api_err, ApiError::Unauthorized { .. }));
}
