use crate::{DbError, Result as DbErrorResult};

use idsync_core::SettingsMap;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct UserSettingsRepository {
    pool: SqlitePool,
}

impl UserSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, external_id: &str) -> DbErrorResult<Option<SettingsMap>> {
        let row = sqlx::query("SELECT data FROM ids_user_settings WHERE external_id = ?")
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<SettingsMap> {
            let raw: String = r.try_get("data")?;
            serde_json::from_str(&raw).map_err(|e| DbError::Serialization {
                message: format!("Corrupt JSON in ids_user_settings.data: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }

    /// Replace the user's settings document wholesale.
    pub async fn upsert(&self, external_id: &str, settings: &SettingsMap) -> DbErrorResult<()> {
        let data = serde_json::to_string(settings).map_err(|e| DbError::Serialization {
            message: format!("Cannot serialize user settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO ids_user_settings (external_id, data, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(external_id) DO UPDATE SET
                  data = excluded.data,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(external_id)
        .bind(&data)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
