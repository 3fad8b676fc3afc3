pub mod audit_log_repository;
pub mod org_mapping_repository;
pub mod org_settings_repository;
pub mod profile_repository;
pub mod user_settings_repository;
