mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod server_config;
mod webhook_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use server_config::ServerConfig;
pub use webhook_config::WebhookConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8100;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 10_000;
const DEFAULT_DATABASE_FILENAME: &str = "idsync.db";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
const MIN_PROVIDER_TIMEOUT_SECS: u64 = 1;
const MAX_PROVIDER_TIMEOUT_SECS: u64 = 120;
const MIN_JWT_SECRET_LEN: usize = 32;
const DEFAULT_WEBHOOK_TOLERANCE_SECS: i64 = 300;
const MIN_WEBHOOK_TOLERANCE_SECS: i64 = 1;
const MAX_WEBHOOK_TOLERANCE_SECS: i64 = 3600;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
