use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link between a provider organization id and the application's internal
/// organization key. Org-scoped data is stored under the internal key
/// only; no mapping means no org-scoped writes land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMapping {
    pub external_org_id: String,
    pub internal_id: i64,
    pub created_at: DateTime<Utc>,
}
