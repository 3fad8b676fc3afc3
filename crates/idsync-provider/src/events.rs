use crate::error::WebhookError;
use crate::types::UserObject;

use idsync_core::{Identity, IdentityEvent, IdentityEventKind};

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

/// Raw webhook envelope: a kind tag plus a kind-specific data object.
#[derive(Debug, Deserialize)]
struct EventEnvelope {
    #[serde(rename = "type")]
    kind: String,
    data: Value,
}

/// Deletion events carry a bare reference, not a full user object.
#[derive(Debug, Deserialize)]
struct DeletedObject {
    id: String,
}

/// Result of decoding a verified webhook payload.
#[derive(Debug)]
pub enum ParsedEvent {
    Known(IdentityEvent),
    /// A kind this service does not consume. Acknowledged upstream so
    /// the provider stops redelivering it.
    Ignored {
        kind: String,
    },
}

/// Decode a verified delivery payload into an identity event.
///
/// Unknown event kinds are not an error; the provider sends many kinds
/// per endpoint and subscription filters are advisory.
pub fn parse_event(delivery_id: &str, payload: &[u8]) -> Result<ParsedEvent, WebhookError> {
    let envelope: EventEnvelope =
        serde_json::from_slice(payload).map_err(WebhookError::malformed_payload)?;

    let Ok(kind) = IdentityEventKind::from_str(&envelope.kind) else {
        return Ok(ParsedEvent::Ignored {
            kind: envelope.kind,
        });
    };

    let event = match kind {
        IdentityEventKind::UserDeleted => {
            let deleted: DeletedObject =
                serde_json::from_value(envelope.data).map_err(WebhookError::malformed_payload)?;
            IdentityEvent::deleted(delivery_id, deleted.id)
        }
        IdentityEventKind::UserCreated | IdentityEventKind::UserUpdated => {
            let user: UserObject =
                serde_json::from_value(envelope.data).map_err(WebhookError::malformed_payload)?;
            let identity = Identity::from(user);
            match kind {
                IdentityEventKind::UserCreated => IdentityEvent::created(delivery_id, identity),
                _ => IdentityEvent::updated(delivery_id, identity),
            }
        }
    };

    Ok(ParsedEvent::Known(event))
}
