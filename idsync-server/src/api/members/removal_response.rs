use serde::Serialize;

/// How the membership ended: `"left"` or `"removed"`.
#[derive(Debug, Serialize)]
pub struct RemovalResponse {
    pub outcome: String,
}
