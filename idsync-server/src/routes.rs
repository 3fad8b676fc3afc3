use crate::health;
use crate::state::AppState;
use crate::{
    create_organization, invite_user, list_members, read_settings, receive_identity_event,
    remove_member, sync_user, transfer_owner, update_member_role, write_settings,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Provider event intake (svix-signed, no bearer token)
        .route("/identity-events", post(receive_identity_event))
        // On-demand reconciliation
        .route("/sync-user", post(sync_user))
        // Settings merge layer
        .route("/settings", get(read_settings).put(write_settings))
        // Membership administration
        .route(
            "/org-members",
            get(list_members).put(update_member_role).delete(remove_member),
        )
        .route("/invite-user", post(invite_user))
        .route("/transfer-owner", post(transfer_owner))
        // Organization lifecycle
        .route("/create-organization", post(create_organization))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (single-page apps call this API cross-origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
