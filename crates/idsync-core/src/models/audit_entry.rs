use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit actions recorded for membership administration.
pub mod actions {
    pub const ORGANIZATION_CREATED: &str = "organization.created";
    pub const MEMBER_INVITED: &str = "member.invited";
    pub const MEMBER_ROLE_UPDATED: &str = "member.role_updated";
    pub const MEMBER_REMOVED: &str = "member.removed";
    pub const MEMBER_LEFT: &str = "member.left";
    pub const OWNERSHIP_TRANSFERRED: &str = "ownership.transferred";
}

/// One administrative action against an organization, written after the
/// provider call succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,

    pub organization_id: String,
    pub actor_id: String,
    pub action: String,

    /// Who or what the action touched (membership id, email, user id).
    pub target: Option<String>,
    pub detail: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        organization_id: impl Into<String>,
        actor_id: impl Into<String>,
        action: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id: organization_id.into(),
            actor_id: actor_id.into(),
            action: action.to_string(),
            target: None,
            detail: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
