use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_WEBHOOK_TOLERANCE_SECS, MAX_WEBHOOK_TOLERANCE_SECS,
    MIN_WEBHOOK_TOLERANCE_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Signing secret the provider configured for this endpoint
    pub secret: String,
    /// Accepted clock skew on delivery timestamps
    pub tolerance_secs: i64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            tolerance_secs: DEFAULT_WEBHOOK_TOLERANCE_SECS,
        }
    }
}

impl WebhookConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.secret.is_empty() {
            return Err(ConfigError::webhook("webhook.secret is required"));
        }

        if self.tolerance_secs < MIN_WEBHOOK_TOLERANCE_SECS
            || self.tolerance_secs > MAX_WEBHOOK_TOLERANCE_SECS
        {
            return Err(ConfigError::webhook(format!(
                "webhook.tolerance_secs must be {}-{}, got {}",
                MIN_WEBHOOK_TOLERANCE_SECS, MAX_WEBHOOK_TOLERANCE_SECS, self.tolerance_secs
            )));
        }

        Ok(())
    }
}
