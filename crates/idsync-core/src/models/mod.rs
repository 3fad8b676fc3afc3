pub mod actor;
pub mod audit_entry;
pub mod capability;
pub mod event;
pub mod identity;
pub mod invitation;
pub mod membership;
pub mod org_mapping;
pub mod organization;
pub mod profile;
pub mod settings;
pub mod sync_outcome;
