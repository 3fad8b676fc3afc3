use idsync_auth::JwtValidator;
use idsync_engine::{
    MembershipService, Metrics, OrganizationService, ReconciliationEngine, SettingsService,
};
use idsync_provider::WebhookVerifier;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state injected into every handler.
///
/// Everything here is constructed once in `main` and cloned per request;
/// no component holds request-scoped state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt: Arc<JwtValidator>,
    pub webhooks: Arc<WebhookVerifier>,
    pub reconciliation: ReconciliationEngine,
    pub settings: SettingsService,
    pub membership: MembershipService,
    pub organizations: OrganizationService,
    pub metrics: Metrics,
}
