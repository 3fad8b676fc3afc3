use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS,
    MIN_PROVIDER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the identity provider's backend API.
///
/// There is no usable default for the endpoint or the key; both must be
/// configured before the service will start.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            secret_key: String::new(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::provider("provider.base_url is required"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::provider(format!(
                "provider.base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }

        if self.secret_key.is_empty() {
            return Err(ConfigError::provider("provider.secret_key is required"));
        }

        if self.timeout_secs < MIN_PROVIDER_TIMEOUT_SECS
            || self.timeout_secs > MAX_PROVIDER_TIMEOUT_SECS
        {
            return Err(ConfigError::provider(format!(
                "provider.timeout_secs must be {}-{}, got {}",
                MIN_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
