use crate::{Actor, ApiError, AppState};

use idsync_auth::{AuthorizationResolver, Claims, JwtValidator};
use idsync_db::{
    AuditLogRepository, OrgMappingRepository, OrgSettingsRepository, ProfileRepository,
    UserSettingsRepository,
};
use idsync_engine::{
    MembershipService, Metrics, OrganizationService, ReconciliationEngine, SettingsService,
};
use idsync_provider::{ProviderApi, ProviderClient, WebhookVerifier};

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::SqlitePool;

const TEST_JWT_SECRET: &[u8] = b"extractor-test-secret-0123456789abcdef";

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/idsync-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Never called by these tests; the extractor only touches the JWT
    // validator.
    let provider: Arc<dyn ProviderApi> = Arc::new(
        ProviderClient::new("http://127.0.0.1:9", "sk_test_unused", Duration::from_secs(1))
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
            WebhookVerifier::new("extractor-test-webhook-secret", 300).expect("verifier"),
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

fn mint_token(sub: &str, org_id: Option<&str>, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        org_id: org_id.map(String::from),
        exp: now + exp_offset_secs,
        iat: now,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to mint token")
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state().await;
    let token = mint_token("user_1", Some("org_1"), 3600);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Actor::from_request_parts(&mut parts, &state).await;

    let Actor(actor) = result.expect("extraction should succeed");
    assert_eq!(actor.external_user_id, "user_1");
    assert_eq!(actor.organization_id.as_deref(), Some("org_1"));
}

#[tokio::test]
async fn test_extractor_without_active_organization() {
    let state = create_test_state().await;
    let token = mint_token("user_1", None, 3600);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Actor::from_request_parts(&mut parts, &state).await;

    let Actor(actor) = result.expect("extraction should succeed");
    assert_eq!(actor.organization_id, None);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Actor::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_bearer_scheme() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Actor::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_garbage_token() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Authorization", "Bearer not.a.jwt")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Actor::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_expired_token() {
    let state = create_test_state().await;
    let token = mint_token("user_1", Some("org_1"), -120);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Actor::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
