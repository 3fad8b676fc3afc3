use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_LEN};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Token verification settings. Exactly one key source must be set:
/// a shared secret (HS256) or a PEM public key file (RS256).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub jwt_public_key_path: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (None, None) => Err(ConfigError::auth(
                "auth requires jwt_secret (HS256) or jwt_public_key_path (RS256)",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LEN {
                    Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LEN
                    )))
                } else {
                    Ok(())
                }
            }
            (None, Some(_)) => {
                // Resolved here so a bad path fails at startup, not on
                // the first request.
                let path = self
                    .public_key_path(config_dir)
                    .ok_or_else(|| ConfigError::auth("auth.jwt_public_key_path is not set"))?;
                if path.exists() {
                    Ok(())
                } else {
                    Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        path.display()
                    )))
                }
            }
        }
    }

    /// Absolute path to the RS256 public key. Relative paths resolve
    /// against the config directory.
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path.as_ref().map(|raw| {
            let path = Path::new(raw);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                config_dir.join(path)
            }
        })
    }
}
