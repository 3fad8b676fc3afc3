#![allow(dead_code)]

//! Test infrastructure for idsync-server API tests

use idsync_auth::{AuthorizationResolver, Claims, JwtValidator};
use idsync_core::Profile;
use idsync_db::{
    AuditLogRepository, OrgMappingRepository, OrgSettingsRepository, ProfileRepository,
    UserSettingsRepository,
};
use idsync_engine::{
    MembershipService, Metrics, OrganizationService, ReconciliationEngine, SettingsService,
};
use idsync_provider::{ProviderApi, ProviderClient, WebhookVerifier};
use idsync_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request};
use serde_json::json;
use sqlx::SqlitePool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";
pub const TEST_WEBHOOK_SECRET: &str = "integration-test-webhook-secret";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/idsync-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState wired against a mock provider endpoint
pub async fn create_test_state(provider_url: &str) -> AppState {
    let pool = create_test_pool().await;

    let provider: Arc<dyn ProviderApi> = Arc::new(
        ProviderClient::new(provider_url, "sk_test_secret", Duration::from_secs(5))
            .expect("Failed to build provider client"),
    );

    let profiles = ProfileRepository::new(pool.clone());
    let user_settings = UserSettingsRepository::new(pool.clone());
    let org_settings = OrgSettingsRepository::new(pool.clone());
    let mappings = OrgMappingRepository::new(pool.clone());
    let audit = AuditLogRepository::new(pool.clone());

    let resolver = AuthorizationResolver::new(provider.clone());
    let metrics = Metrics::new();

    AppState {
        pool,
        jwt: Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)),
        webhooks: Arc::new(
            WebhookVerifier::new(TEST_WEBHOOK_SECRET, 300).expect("Failed to build verifier"),
        ),
        reconciliation: ReconciliationEngine::new(
            provider.clone(),
            profiles.clone(),
            metrics.clone(),
        ),
        settings: SettingsService::new(
            profiles,
            user_settings,
            org_settings,
            mappings.clone(),
            resolver.clone(),
            metrics.clone(),
        ),
        membership: MembershipService::new(
            provider.clone(),
            resolver,
            audit.clone(),
            metrics.clone(),
        ),
        organizations: OrganizationService::new(provider, mappings, audit, metrics.clone()),
        metrics,
    }
}

/// Mint an HS256 session token the test state accepts
pub fn mint_token(sub: &str, org_id: Option<&str>) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        org_id: org_id.map(String::from),
        exp: now + 3600,
        iat: now,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to mint token")
}

/// Bearer-authenticated request with a JSON body
pub fn authed_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Bearer-authenticated GET request
pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Correctly signed webhook delivery for POST /identity-events
pub fn signed_event_request(
    state: &AppState,
    delivery_id: &str,
    payload: &serde_json::Value,
) -> Request<Body> {
    let body = serde_json::to_vec(payload).expect("Failed to serialize payload");
    signed_raw_event_request(state, delivery_id, body)
}

/// Signed delivery with an arbitrary raw body
pub fn signed_raw_event_request(
    state: &AppState,
    delivery_id: &str,
    body: Vec<u8>,
) -> Request<Body> {
    let timestamp = chrono::Utc::now().timestamp().to_string();
    let signature = state.webhooks.sign(delivery_id, &timestamp, &body);

    Request::builder()
        .method("POST")
        .uri("/identity-events")
        .header("content-type", "application/json")
        .header("webhook-id", delivery_id)
        .header("webhook-timestamp", timestamp)
        .header("webhook-signature", signature)
        .body(Body::from(body))
        .unwrap()
}

/// Seed a mirrored profile row
pub async fn seed_profile(pool: &SqlitePool, external_id: &str, email: &str) {
    let now = chrono::Utc::now();
    let profile = Profile {
        external_id: external_id.to_string(),
        email: Some(email.to_string()),
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        avatar_url: None,
        role: "viewer".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    ProfileRepository::new(pool.clone())
        .upsert(&profile)
        .await
        .expect("Failed to seed profile");
}

/// Seed an organization mapping, returning the internal key
pub async fn seed_org_mapping(pool: &SqlitePool, external_org_id: &str) -> i64 {
    OrgMappingRepository::new(pool.clone())
        .create(external_org_id)
        .await
        .expect("Failed to seed organization mapping")
        .internal_id
}

/// A user as the provider's GET /v1/users/{id} endpoint returns it
pub fn provider_user_json(
    id: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": last_name,
        "image_url": format!("https://img.example-idp.com/{}.png", id),
        "email_addresses": [{"email_address": email}],
    })
}

/// A membership row as the provider's list endpoint returns it
pub fn membership_json(id: &str, org_id: &str, user_id: &str, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "role": role,
        "organization": {"id": org_id},
        "public_user_data": {"user_id": user_id},
    })
}

/// Mount a successful user fetch
pub async fn mock_user_fetch(server: &MockServer, user_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/users/{}", user_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a 404 for a user fetch
pub async fn mock_user_missing(server: &MockServer, user_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/users/{}", user_id)))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"message": "Resource not found"}]
            })),
        )
        .mount(server)
        .await;
}

/// Mount an organization's membership list
pub async fn mock_memberships(
    server: &MockServer,
    org_id: &str,
    memberships: Vec<serde_json::Value>,
) {
    let total = memberships.len();
    Mock::given(method("GET"))
        .and(path(format!("/v1/organizations/{}/memberships", org_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": memberships,
            "total_count": total,
        })))
        .mount(server)
        .await;
}
