use idsync_auth::AuthorizationResolver;
use idsync_core::{ActorContext, Identity, OrgInvitation, OrgMembership, Organization};
use idsync_db::{
    AuditLogRepository, OrgMappingRepository, OrgSettingsRepository, ProfileRepository,
    UserSettingsRepository,
};
use idsync_engine::{
    MembershipService, Metrics, OrganizationService, ReconciliationEngine, SettingsService,
};
use idsync_provider::{
    CreateInvitationParams, CreateOrganizationParams, ProviderApi, ProviderError,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
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

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../idsync-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// In-memory provider double. Mutations are recorded so tests can assert
/// on the provider calls an operation made.
#[derive(Default)]
pub struct FakeProvider {
    pub users: Mutex<HashMap<String, Identity>>,
    pub memberships: Mutex<Vec<OrgMembership>>,
    pub invitations: Mutex<Vec<OrgInvitation>>,
    pub created_organizations: Mutex<Vec<Organization>>,
    /// (organization_id, membership_id, role) per role update
    pub role_updates: Mutex<Vec<(String, String, String)>>,
    /// (organization_id, membership_id) per deletion
    pub deletions: Mutex<Vec<(String, String)>>,
    /// Membership id whose role update fails with a server error
    pub fail_role_update_for: Mutex<Option<String>>,
    user_outage: bool,
    membership_outage: bool,
}

#[allow(dead_code)]
impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, identity: Identity) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(identity.external_id.clone(), identity);
        self
    }

    pub fn with_membership(self, id: &str, organization_id: &str, user_id: &str, role: &str) -> Self {
        self.memberships.lock().unwrap().push(OrgMembership {
            id: id.to_string(),
            organization_id: organization_id.to_string(),
            user_id: user_id.to_string(),
            role: role.to_string(),
        });
        self
    }

    /// All user fetches fail as if the provider were down
    pub fn with_user_outage(mut self) -> Self {
        self.user_outage = true;
        self
    }

    /// All membership listings fail as if the provider were down
    pub fn with_membership_outage(mut self) -> Self {
        self.membership_outage = true;
        self
    }

    pub fn failing_role_update(self, membership_id: &str) -> Self {
        *self.fail_role_update_for.lock().unwrap() = Some(membership_id.to_string());
        self
    }
}

#[async_trait]
impl ProviderApi for FakeProvider {
    async fn fetch_user(&self, user_id: &str) -> Result<Identity, ProviderError> {
        if self.user_outage {
            return Err(ProviderError::api(503, "provider unavailable"));
        }
        self.users
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(format!("user {user_id}")))
    }

    async fn create_organization(
        &self,
        params: CreateOrganizationParams,
    ) -> Result<Organization, ProviderError> {
        let mut created = self.created_organizations.lock().unwrap();
        let organization = Organization {
            id: format!("org_fake_{}", created.len() + 1),
            name: params.name,
            slug: params.slug,
            created_by: Some(params.created_by),
        };
        created.push(organization.clone());
        Ok(organization)
    }

    async fn list_memberships(
        &self,
        organization_id: &str,
        limit: u32,
    ) -> Result<Vec<OrgMembership>, ProviderError> {
        if self.membership_outage {
            return Err(ProviderError::api(503, "provider unavailable"));
        }
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.organization_id == organization_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create_invitation(
        &self,
        organization_id: &str,
        params: CreateInvitationParams,
    ) -> Result<OrgInvitation, ProviderError> {
        let mut invitations = self.invitations.lock().unwrap();
        let invitation = OrgInvitation {
            id: format!("inv_{}", invitations.len() + 1),
            organization_id: organization_id.to_string(),
            email: params.email_address,
            role: params.role,
            status: "pending".to_string(),
        };
        invitations.push(invitation.clone());
        Ok(invitation)
    }

    async fn update_membership_role(
        &self,
        organization_id: &str,
        membership_id: &str,
        role: &str,
    ) -> Result<OrgMembership, ProviderError> {
        if self.fail_role_update_for.lock().unwrap().as_deref() == Some(membership_id) {
            return Err(ProviderError::api(500, "role update failed"));
        }

        let mut memberships = self.memberships.lock().unwrap();
        let membership = memberships
            .iter_mut()
            .find(|m| m.id == membership_id && m.organization_id == organization_id)
            .ok_or_else(|| ProviderError::not_found(format!("membership {membership_id}")))?;
        membership.role = role.to_string();
        let updated = membership.clone();

        self.role_updates.lock().unwrap().push((
            organization_id.to_string(),
            membership_id.to_string(),
            role.to_string(),
        ));
        Ok(updated)
    }

    async fn delete_membership(
        &self,
        organization_id: &str,
        membership_id: &str,
    ) -> Result<(), ProviderError> {
        let mut memberships = self.memberships.lock().unwrap();
        let before = memberships.len();
        memberships.retain(|m| !(m.id == membership_id && m.organization_id == organization_id));
        if memberships.len() == before {
            return Err(ProviderError::not_found(format!(
                "membership {membership_id}"
            )));
        }

        self.deletions
            .lock()
            .unwrap()
            .push((organization_id.to_string(), membership_id.to_string()));
        Ok(())
    }
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
pub fn actor(external_user_id: &str, organization_id: Option<&str>) -> ActorContext {
    ActorContext::new(external_user_id, organization_id.map(str::to_string))
}

#[allow(dead_code)]
pub fn reconciliation_engine(
    provider: Arc<FakeProvider>,
    pool: &SqlitePool,
) -> ReconciliationEngine {
    ReconciliationEngine::new(provider, ProfileRepository::new(pool.clone()), Metrics::new())
}

#[allow(dead_code)]
pub fn settings_service(provider: Arc<FakeProvider>, pool: &SqlitePool) -> SettingsService {
    SettingsService::new(
        ProfileRepository::new(pool.clone()),
        UserSettingsRepository::new(pool.clone()),
        OrgSettingsRepository::new(pool.clone()),
        OrgMappingRepository::new(pool.clone()),
        AuthorizationResolver::new(provider),
        Metrics::new(),
    )
}

#[allow(dead_code)]
pub fn membership_service(provider: Arc<FakeProvider>, pool: &SqlitePool) -> MembershipService {
    MembershipService::new(
        provider.clone(),
        AuthorizationResolver::new(provider),
        AuditLogRepository::new(pool.clone()),
        Metrics::new(),
    )
}

#[allow(dead_code)]
pub fn organization_service(provider: Arc<FakeProvider>, pool: &SqlitePool) -> OrganizationService {
    OrganizationService::new(
        provider,
        OrgMappingRepository::new(pool.clone()),
        AuditLogRepository::new(pool.clone()),
        Metrics::new(),
    )
}
