use crate::{DbError, Result as DbErrorResult};

use idsync_core::SettingsMap;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};

/// Organization settings are keyed by the application's internal org id,
/// never by the provider's. Callers resolve the mapping first.
#[derive(Clone)]
pub struct OrgSettingsRepository {
    pool: SqlitePool,
}

impl OrgSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, internal_org_id: i64) -> DbErrorResult<Option<SettingsMap>> {
        let row = sqlx::query("SELECT data FROM ids_org_settings WHERE internal_org_id = ?")
            .bind(internal_org_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<SettingsMap> {
            let raw: String = r.try_get("data")?;
            serde_json::from_str(&raw).map_err(|e| DbError::Serialization {
                message: format!("Corrupt JSON in ids_org_settings.data: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }

    pub async fn upsert(&self, internal_org_id: i64, settings: &SettingsMap) -> DbErrorResult<()> {
        let data = serde_json::to_string(settings).map_err(|e| DbError::Serialization {
            message: format!("Cannot serialize org settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO ids_org_settings (internal_org_id, data, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(internal_org_id) DO UPDATE SET
                  data = excluded.data,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(internal_org_id)
        .bind(&data)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
