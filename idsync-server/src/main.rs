pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    events::{event_ack_response::EventAckResponse, events::receive_identity_event},
    extractors::actor::Actor,
    invitations::{
        invitation_dto::InvitationDto,
        invitation_response::InvitationResponse,
        invitations::invite_user,
        invite_user_request::InviteUserRequest,
    },
    members::{
        member_dto::MemberDto,
        member_list_query::MemberListQuery,
        member_list_response::MemberListResponse,
        member_response::MemberResponse,
        members::{list_members, remove_member, transfer_owner, update_member_role},
        removal_response::RemovalResponse,
        remove_member_request::RemoveMemberRequest,
        transfer_owner_request::TransferOwnerRequest,
        transfer_owner_response::TransferOwnerResponse,
        update_role_request::UpdateRoleRequest,
    },
    organizations::{
        create_organization_request::CreateOrganizationRequest,
        organization_dto::OrganizationDto,
        organization_response::OrganizationResponse,
        organizations::create_organization,
    },
    profile_dto::ProfileDto,
    settings::{
        settings::{read_settings, write_settings},
        settings_bundle_response::SettingsBundleResponse,
        settings_query::SettingsQuery,
        update_settings_request::UpdateSettingsRequest,
    },
    sync::{profile_response::ProfileResponse, sync::sync_user, sync_user_request::SyncUserRequest},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use idsync_auth::{AuthorizationResolver, JwtValidator};
use idsync_config::Config;
use idsync_db::{
    AuditLogRepository, OrgMappingRepository, OrgSettingsRepository, ProfileRepository,
    UserSettingsRepository,
};
use idsync_engine::{
    MembershipService, Metrics, OrganizationService, ReconciliationEngine, SettingsService,
};
use idsync_provider::{ProviderApi, ProviderClient, WebhookVerifier};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env for local development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let config_dir = Config::config_dir()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let path = config_dir.join(filename);

        // Ensure log directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Some(path)
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting idsync-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/idsync-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Create JWT validator
    let jwt_validator = if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 token verification");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(key_path) = config.auth.public_key_path(&config_dir) {
        let public_key =
            std::fs::read_to_string(&key_path).map_err(|e| error::ServerError::JwtKeyFile {
                path: key_path.display().to_string(),
                source: e,
            })?;
        info!("JWT: RS256 token verification");
        JwtValidator::with_rs256(&public_key)?
    } else {
        unreachable!("validate() ensures a JWT key source")
    };

    // Create webhook verifier
    let webhook_verifier =
        WebhookVerifier::new(&config.webhook.secret, config.webhook.tolerance_secs)?;

    // Create provider client
    let provider: Arc<dyn ProviderApi> = Arc::new(ProviderClient::new(
        &config.provider.base_url,
        &config.provider.secret_key,
        Duration::from_secs(config.provider.timeout_secs),
    )?);
    info!("Provider client targeting {}", config.provider.base_url);

    // Create repositories
    let profiles = ProfileRepository::new(pool.clone());
    let user_settings = UserSettingsRepository::new(pool.clone());
    let org_settings = OrgSettingsRepository::new(pool.clone());
    let mappings = OrgMappingRepository::new(pool.clone());
    let audit = AuditLogRepository::new(pool.clone());

    // Shared authorization resolver and metrics collector
    let resolver = AuthorizationResolver::new(provider.clone());
    let metrics = Metrics::new();

    // Build services
    let reconciliation =
        ReconciliationEngine::new(provider.clone(), profiles.clone(), metrics.clone());
    let settings = SettingsService::new(
        profiles,
        user_settings,
        org_settings,
        mappings.clone(),
        resolver.clone(),
        metrics.clone(),
    );
    let membership =
        MembershipService::new(provider.clone(), resolver, audit.clone(), metrics.clone());
    let organizations = OrganizationService::new(provider, mappings, audit, metrics.clone());

    // Build application state
    let app_state = AppState {
        pool,
        jwt: Arc::new(jwt_validator),
        webhooks: Arc::new(webhook_verifier),
        reconciliation,
        settings,
        membership,
        organizations,
        metrics,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept requests");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
