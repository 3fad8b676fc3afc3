use crate::error::{CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 128;

/// An organization as the identity provider reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_by: Option<String>,
}

impl Organization {
    #[track_caller]
    pub fn validate_name(name: &str) -> CoreResult<()> {
        if name.trim().is_empty() {
            return Err(CoreError::validation("organization name must not be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(CoreError::validation(format!(
                "organization name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Slugs are lowercase alphanumeric with interior hyphens, matching
    /// what the provider accepts for URL-safe organization slugs.
    #[track_caller]
    pub fn validate_slug(slug: &str) -> CoreResult<()> {
        let valid = !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if valid {
            Ok(())
        } else {
            Err(CoreError::validation(format!(
                "invalid organization slug: {slug:?}"
            )))
        }
    }
}
