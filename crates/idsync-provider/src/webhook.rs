use crate::error::WebhookError;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted clock skew between the delivery timestamp and now.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Prefix the provider puts on base64-encoded webhook secrets.
const SECRET_PREFIX: &str = "whsec_";

/// Scheme tag on each signature candidate in the signature header.
const SIGNATURE_VERSION: &str = "v1";

/// Verifies webhook deliveries signed with the provider's scheme:
/// HMAC-SHA256 over `{delivery_id}.{timestamp}.{payload}`, transported
/// base64-encoded as space-separated `v1,<sig>` candidates.
pub struct WebhookVerifier {
    key: Vec<u8>,
    tolerance_secs: i64,
}

impl WebhookVerifier {
    /// Build a verifier from the endpoint secret. Secrets prefixed with
    /// `whsec_` are base64-decoded; anything else is used as raw bytes.
    pub fn new(secret: &str, tolerance_secs: i64) -> Result<Self, WebhookError> {
        let key = match secret.strip_prefix(SECRET_PREFIX) {
            Some(encoded) => BASE64
                .decode(encoded)
                .map_err(|_| WebhookError::invalid_secret())?,
            None => secret.as_bytes().to_vec(),
        };

        Ok(Self {
            key,
            tolerance_secs,
        })
    }

    /// Check a delivery's timestamp and signature against the payload.
    ///
    /// The signature header may carry several space-separated candidates
    /// (the provider sends old and new signatures during secret rolls);
    /// any matching `v1` candidate accepts the delivery.
    pub fn verify(
        &self,
        delivery_id: &str,
        timestamp: &str,
        signature_header: &str,
        payload: &[u8],
    ) -> Result<(), WebhookError> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| WebhookError::malformed_timestamp(timestamp))?;

        let skew = (Utc::now().timestamp() - ts).abs();
        if skew > self.tolerance_secs {
            return Err(WebhookError::stale_timestamp(skew, self.tolerance_secs));
        }

        let expected = self.compute_signature(delivery_id, timestamp, payload);

        for candidate in signature_header.split_whitespace() {
            let Some((version, encoded)) = candidate.split_once(',') else {
                continue;
            };
            if version != SIGNATURE_VERSION {
                continue;
            }
            let Ok(raw) = BASE64.decode(encoded) else {
                continue;
            };
            if constant_time_eq(&raw, &expected) {
                return Ok(());
            }
        }

        Err(WebhookError::signature_mismatch())
    }

    /// Signature header value for a payload. Used to sign test deliveries.
    pub fn sign(&self, delivery_id: &str, timestamp: &str, payload: &[u8]) -> String {
        let signature = self.compute_signature(delivery_id, timestamp, payload);
        format!("{},{}", SIGNATURE_VERSION, BASE64.encode(signature))
    }

    fn compute_signature(&self, delivery_id: &str, timestamp: &str, payload: &[u8]) -> Vec<u8> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.key)
            .expect("HMAC can take key of any size");

        mac.update(delivery_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);

        mac.finalize().into_bytes().to_vec()
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
