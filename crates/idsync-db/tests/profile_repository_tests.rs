mod common;

use common::{create_test_pool, test_identity, test_profile};

use idsync_core::{Identity, Profile};
use idsync_db::ProfileRepository;

use chrono::Utc;
use googletest::prelude::*;

#[tokio::test]
async fn given_new_profile_when_inserted_then_can_be_found() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());
    let profile = test_profile("user_1");

    // When: Inserting the profile
    let written = repo.insert_if_absent(&profile).await.unwrap();

    // Then: A row was written and can be read back
    assert_that!(written, eq(true));

    let found = repo.find_by_external_id("user_1").await.unwrap();
    assert_that!(found, some(anything()));

    let found = found.unwrap();
    assert_that!(found.external_id, eq(&"user_1".to_string()));
    assert_that!(found.email, some(eq(&"user_1@example.com".to_string())));
    assert_that!(found.role, eq(&"viewer".to_string()));
    assert_that!(found.is_active, eq(true));
}

#[tokio::test]
async fn given_existing_profile_when_inserted_again_then_nothing_written() {
    // Given: A stored profile
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());
    let profile = test_profile("user_1");
    repo.insert_if_absent(&profile).await.unwrap();

    // When: Inserting a second snapshot for the same user
    let mut second = test_profile("user_1");
    second.email = Some("changed@example.com".to_string());
    let written = repo.insert_if_absent(&second).await.unwrap();

    // Then: The insert was a no-op and the original row survives
    assert_that!(written, eq(false));

    let found = repo.find_by_external_id("user_1").await.unwrap().unwrap();
    assert_that!(found.email, some(eq(&"user_1@example.com".to_string())));
}

#[tokio::test]
async fn given_existing_profile_when_mirrored_fields_updated_then_overwritten() {
    // Given: A stored profile
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());
    repo.insert_if_absent(&test_profile("user_1")).await.unwrap();

    // When: Applying a newer snapshot
    let mut identity = test_identity("user_1");
    identity.email = Some("renamed@example.com".to_string());
    identity.first_name = Some("Renamed".to_string());
    let updated = repo.update_mirrored(&identity, Utc::now()).await.unwrap();

    // Then: Mirrored fields changed, application-owned fields did not
    assert_that!(updated, eq(true));

    let found = repo.find_by_external_id("user_1").await.unwrap().unwrap();
    assert_that!(found.email, some(eq(&"renamed@example.com".to_string())));
    assert_that!(found.first_name, some(eq(&"Renamed".to_string())));
    assert_that!(found.role, eq(&"viewer".to_string()));
}

#[tokio::test]
async fn given_no_profile_when_mirrored_fields_updated_then_skipped() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());

    // When: Updating a user that was never provisioned
    let updated = repo
        .update_mirrored(&test_identity("ghost"), Utc::now())
        .await
        .unwrap();

    // Then: Nothing was written and no row appeared
    assert_that!(updated, eq(false));
    let found = repo.find_by_external_id("ghost").await.unwrap();
    assert_that!(found, none());
}

#[tokio::test]
async fn given_profile_with_custom_role_when_upserted_then_role_survives() {
    // Given: A profile whose application role was changed after provisioning
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());
    let mut profile = test_profile("user_1");
    repo.insert_if_absent(&profile).await.unwrap();

    sqlx::query("UPDATE ids_profiles SET role = 'editor', is_active = 0 WHERE external_id = ?")
        .bind("user_1")
        .execute(&pool)
        .await
        .unwrap();

    // When: Upserting a fresh snapshot
    profile.email = Some("fresh@example.com".to_string());
    repo.upsert(&profile).await.unwrap();

    // Then: Mirrored columns replaced, role and activation preserved
    let found = repo.find_by_external_id("user_1").await.unwrap().unwrap();
    assert_that!(found.email, some(eq(&"fresh@example.com".to_string())));
    assert_that!(found.role, eq(&"editor".to_string()));
    assert_that!(found.is_active, eq(false));
}

#[tokio::test]
async fn given_no_profile_when_upserted_then_created_with_defaults() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());

    // When: Upserting a never-seen user
    repo.upsert(&test_profile("user_2")).await.unwrap();

    // Then: The row exists with application defaults
    let found = repo.find_by_external_id("user_2").await.unwrap().unwrap();
    assert_that!(found.role, eq(&"viewer".to_string()));
    assert_that!(found.is_active, eq(true));
}

#[tokio::test]
async fn given_snapshot_without_email_when_upserted_then_column_cleared() {
    // Given: A stored profile with an email
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());
    repo.insert_if_absent(&test_profile("user_1")).await.unwrap();

    // When: The provider no longer reports an email
    let profile = Profile::from_identity(&Identity::new("user_1"));
    repo.upsert(&profile).await.unwrap();

    // Then: The mirror reflects the full replacement
    let found = repo.find_by_external_id("user_1").await.unwrap().unwrap();
    assert_that!(found.email, none());
    assert_that!(found.first_name, none());
}

#[tokio::test]
async fn given_profile_when_deleted_then_gone_and_second_delete_noop() {
    // Given: A stored profile
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool.clone());
    repo.insert_if_absent(&test_profile("user_1")).await.unwrap();

    // When: Deleting it twice
    let first = repo.delete_if_present("user_1").await.unwrap();
    let second = repo.delete_if_present("user_1").await.unwrap();

    // Then: Only the first delete touched a row
    assert_that!(first, eq(true));
    assert_that!(second, eq(false));
    assert_that!(repo.find_by_external_id("user_1").await.unwrap(), none());
}
