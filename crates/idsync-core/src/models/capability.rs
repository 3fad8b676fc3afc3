use std::fmt;

use serde::{Deserialize, Serialize};

/// Role strings the identity provider uses for organization memberships.
/// Comparison is case-sensitive: the provider emits canonical lowercase.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const ORG_ADMIN: &str = "org:admin";
    pub const OWNER: &str = "owner";
    pub const BASIC_MEMBER: &str = "basic_member";
    pub const ORG_MEMBER: &str = "org:member";

    /// Spellings that carry administrative capability.
    pub const ADMIN_ROLES: [&str; 3] = [ADMIN, ORG_ADMIN, OWNER];

    /// Roles accepted for invitations and role updates. Anything else is
    /// rejected locally before a remote call is made.
    pub const ASSIGNABLE: [&str; 5] = [ADMIN, ORG_ADMIN, OWNER, BASIC_MEMBER, ORG_MEMBER];

    pub fn is_assignable(role: &str) -> bool {
        ASSIGNABLE.contains(&role)
    }
}

/// Coarse capability derived from a provider membership role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityClass {
    OrgAdmin,
    Member,
    None,
}

impl CapabilityClass {
    /// Classify the role string of an existing membership.
    ///
    /// Unrecognized role strings degrade to `Member`, never to `OrgAdmin`.
    /// Callers that found no membership at all use [`CapabilityClass::None`]
    /// directly; this function assumes a membership exists.
    pub fn from_role(role: &str) -> Self {
        if roles::ADMIN_ROLES.contains(&role) {
            Self::OrgAdmin
        } else {
            Self::Member
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::OrgAdmin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrgAdmin => "org_admin",
            Self::Member => "member",
            Self::None => "none",
        }
    }
}

impl fmt::Display for CapabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
