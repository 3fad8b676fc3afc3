pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error_location::ErrorLocation;

pub use error::{CoreError, Result as CoreResult};
pub use models::actor::ActorContext;
pub use models::audit_entry::AuditEntry;
pub use models::capability::{CapabilityClass, roles};
pub use models::event::{IdentityChange, IdentityEvent, IdentityEventKind};
pub use models::identity::Identity;
pub use models::invitation::OrgInvitation;
pub use models::membership::OrgMembership;
pub use models::org_mapping::OrganizationMapping;
pub use models::organization::Organization;
pub use models::profile::Profile;
pub use models::settings::{SettingsBundle, SettingsMap};
pub use models::sync_outcome::SyncOutcome;
