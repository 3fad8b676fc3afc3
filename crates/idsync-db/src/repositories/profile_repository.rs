use crate::{DbError, Result as DbErrorResult};

use idsync_core::{Identity, Profile};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new profile unless one already exists for the user.
    /// Returns whether a row was written, so a redelivered creation event
    /// is distinguishable from the first one.
    pub async fn insert_if_absent(&self, profile: &Profile) -> DbErrorResult<bool> {
        let created_at = profile.created_at.timestamp();
        let updated_at = profile.updated_at.timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO ids_profiles (
                  external_id, email, first_name, last_name, avatar_url,
                  role, is_active, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(external_id) DO NOTHING
              "#,
        )
        .bind(&profile.external_id)
        .bind(&profile.email)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.avatar_url)
        .bind(&profile.role)
        .bind(profile.is_active)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the mirrored columns of an existing profile. Returns
    /// false when no profile exists for the user; nothing is created.
    pub async fn update_mirrored(
        &self,
        identity: &Identity,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE ids_profiles
              SET email = ?, first_name = ?, last_name = ?, avatar_url = ?, updated_at = ?
              WHERE external_id = ?
              "#,
        )
        .bind(&identity.email)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.avatar_url)
        .bind(updated_at.timestamp())
        .bind(&identity.external_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert the profile, or overwrite the mirrored columns when one
    /// already exists. The application-owned columns (role, is_active,
    /// created_at) keep their stored values on conflict.
    pub async fn upsert(&self, profile: &Profile) -> DbErrorResult<()> {
        let created_at = profile.created_at.timestamp();
        let updated_at = profile.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO ids_profiles (
                  external_id, email, first_name, last_name, avatar_url,
                  role, is_active, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(external_id) DO UPDATE SET
                  email = excluded.email,
                  first_name = excluded.first_name,
                  last_name = excluded.last_name,
                  avatar_url = excluded.avatar_url,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(&profile.external_id)
        .bind(&profile.email)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.avatar_url)
        .bind(&profile.role)
        .bind(profile.is_active)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the profile. Returns whether a row existed.
    pub async fn delete_if_present(&self, external_id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM ids_profiles WHERE external_id = ?")
            .bind(external_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(
            r#"
              SELECT external_id, email, first_name, last_name, avatar_url,
                     role, is_active, created_at, updated_at
              FROM ids_profiles
              WHERE external_id = ?
              "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_profile(&r)).transpose()
    }
}

fn map_profile(row: &SqliteRow) -> DbErrorResult<Profile> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Profile {
        external_id: row.try_get("external_id")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        avatar_url: row.try_get("avatar_url")?,
        role: row.try_get("role")?,
        is_active: row.try_get("is_active")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in ids_profiles.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in ids_profiles.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
