use crate::{DbError, Result as DbErrorResult};

use idsync_core::AuditEntry;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct AuditLogRepository {
    pool: SqlitePool,
}

impl AuditLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn record(&self, entry: &AuditEntry) -> DbErrorResult<()> {
        let id = entry.id.to_string();
        let created_at = entry.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO ids_audit_log (
                  id, organization_id, actor_id, action, target, detail, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&entry.organization_id)
        .bind(&entry.actor_id)
        .bind(&entry.action)
        .bind(&entry.target)
        .bind(&entry.detail)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_for_organization(
        &self,
        organization_id: &str,
        limit: i64,
    ) -> DbErrorResult<Vec<AuditEntry>> {
        let rows = sqlx::query(
            r#"
              SELECT id, organization_id, actor_id, action, target, detail, created_at
              FROM ids_audit_log
              WHERE organization_id = ?
              ORDER BY created_at DESC
              LIMIT ?
              "#,
        )
        .bind(organization_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_entry).collect()
    }
}

fn map_entry(row: &SqliteRow) -> DbErrorResult<AuditEntry> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(AuditEntry {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in ids_audit_log.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        organization_id: row.try_get("organization_id")?,
        actor_id: row.try_get("actor_id")?,
        action: row.try_get("action")?,
        target: row.try_get("target")?,
        detail: row.try_get("detail")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in ids_audit_log.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
