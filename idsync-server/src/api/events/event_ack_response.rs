use serde::Serialize;

/// Acknowledgement for a webhook delivery. `outcome` is the
/// reconciliation outcome, or `"ignored"` for unconsumed event kinds.
#[derive(Debug, Serialize)]
pub struct EventAckResponse {
    pub outcome: String,
}
