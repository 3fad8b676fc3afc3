pub mod error;
pub mod membership;
pub mod metrics;
pub mod organizations;
pub mod reconciliation;
pub mod settings;

pub use error::{EngineError, Result, SyncError};
pub use membership::{MembershipService, RemovalKind};
pub use metrics::Metrics;
pub use organizations::OrganizationService;
pub use reconciliation::ReconciliationEngine;
pub use settings::{SettingsService, SettingsUpdate};
