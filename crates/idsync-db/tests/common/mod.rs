use idsync_core::{Identity, Profile};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Builds an identity snapshot with every mirrored field populated
#[allow(dead_code)]
pub fn test_identity(external_id: &str) -> Identity {
    let mut identity = Identity::new(external_id);
    identity.email = Some(format!("{}@example.com", external_id));
    identity.first_name = Some("Test".to_string());
    identity.last_name = Some("User".to_string());
    identity.avatar_url = Some(format!("https://img.example.com/{}.png", external_id));
    identity
}

#[allow(dead_code)]
pub fn test_profile(external_id: &str) -> Profile {
    Profile::from_identity(&test_identity(external_id))
}
