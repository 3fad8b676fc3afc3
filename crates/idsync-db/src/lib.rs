pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::audit_log_repository::AuditLogRepository;
pub use repositories::org_mapping_repository::OrgMappingRepository;
pub use repositories::org_settings_repository::OrgSettingsRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_settings_repository::UserSettingsRepository;
