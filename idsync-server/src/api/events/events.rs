//! Identity event webhook handler
//!
//! Deliveries authenticate by signature, not bearer token. Verification
//! runs against the raw body before any parsing or datastore access.

use crate::{ApiError, ApiResult, EventAckResponse};
use crate::state::AppState;

use idsync_provider::{ParsedEvent, parse_event};

use std::panic::Location;

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use error_location::ErrorLocation;

/// POST /identity-events
///
/// Receive a signed identity change notification from the provider.
pub async fn receive_identity_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<EventAckResponse>> {
    // 1. Collect the signature headers
    let delivery_id = required_header(&headers, "webhook-id")?;
    let timestamp = required_header(&headers, "webhook-timestamp")?;
    let signature = required_header(&headers, "webhook-signature")?;

    // 2. Verify before touching the payload
    state
        .webhooks
        .verify(delivery_id, timestamp, signature, &body)?;

    // 3. Decode; unknown kinds are acknowledged so the provider stops
    //    redelivering them
    let event = match parse_event(delivery_id, &body)? {
        ParsedEvent::Known(event) => event,
        ParsedEvent::Ignored { kind } => {
            state.metrics.event_ignored();
            log::info!(
                "Identity event ignored: kind={} delivery={}",
                kind,
                delivery_id
            );
            return Ok(Json(EventAckResponse {
                outcome: "ignored".to_string(),
            }));
        }
    };

    // 4. Reconcile
    let outcome = state.reconciliation.apply_event(&event).await?;

    Ok(Json(EventAckResponse {
        outcome: outcome.as_str().to_string(),
    }))
}

fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Validation {
            message: format!("missing or unreadable {} header", name),
            location: ErrorLocation::from(Location::caller()),
        })
}
