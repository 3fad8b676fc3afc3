use crate::{DbError, Result as DbErrorResult};

use idsync_core::OrganizationMapping;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct OrgMappingRepository {
    pool: SqlitePool,
}

impl OrgMappingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_external_org(
        &self,
        external_org_id: &str,
    ) -> DbErrorResult<Option<OrganizationMapping>> {
        let row = sqlx::query(
            r#"
              SELECT internal_id, external_org_id, created_at
              FROM ids_org_mappings
              WHERE external_org_id = ?
              "#,
        )
        .bind(external_org_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_mapping(&r)).transpose()
    }

    /// Register a mapping for a newly onboarded organization. The internal
    /// id is assigned by the database.
    pub async fn create(&self, external_org_id: &str) -> DbErrorResult<OrganizationMapping> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO ids_org_mappings (external_org_id, created_at) VALUES (?, ?)",
        )
        .bind(external_org_id)
        .bind(created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(OrganizationMapping {
            external_org_id: external_org_id.to_string(),
            internal_id: result.last_insert_rowid(),
            created_at,
        })
    }
}

fn map_mapping(row: &SqliteRow) -> DbErrorResult<OrganizationMapping> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(OrganizationMapping {
        internal_id: row.try_get("internal_id")?,
        external_org_id: row.try_get("external_org_id")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in ids_org_mappings.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
