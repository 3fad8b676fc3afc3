use crate::error::{EngineError, Result};
use crate::metrics::Metrics;

use idsync_auth::AuthorizationResolver;
use idsync_core::{ActorContext, SettingsBundle, SettingsMap};
use idsync_db::{
    OrgMappingRepository, OrgSettingsRepository, ProfileRepository, UserSettingsRepository,
};

use log::{debug, warn};

/// A settings write request. Scopes are independent; either may be
/// absent, but at least one must be present.
#[derive(Debug, Default)]
pub struct SettingsUpdate {
    pub user_settings: Option<SettingsMap>,
    pub org_settings: Option<SettingsMap>,
}

/// Reads and writes the two settings scopes.
///
/// User scope belongs to the caller alone. Organization scope is shared
/// and admin-gated, and only exists once the organization has a local
/// mapping.
#[derive(Clone)]
pub struct SettingsService {
    profiles: ProfileRepository,
    user_settings: UserSettingsRepository,
    org_settings: OrgSettingsRepository,
    mappings: OrgMappingRepository,
    resolver: AuthorizationResolver,
    metrics: Metrics,
}

impl SettingsService {
    pub fn new(
        profiles: ProfileRepository,
        user_settings: UserSettingsRepository,
        org_settings: OrgSettingsRepository,
        mappings: OrgMappingRepository,
        resolver: AuthorizationResolver,
        metrics: Metrics,
    ) -> Self {
        Self {
            profiles,
            user_settings,
            org_settings,
            mappings,
            resolver,
            metrics,
        }
    }

    /// The caller's merged settings view: profile plus both scopes.
    ///
    /// Missing documents come back as empty maps, and an organization
    /// without a local mapping contributes an empty org scope rather
    /// than an error.
    pub async fn read(
        &self,
        actor: &ActorContext,
        organization_id: Option<&str>,
    ) -> Result<SettingsBundle> {
        let profile = self
            .profiles
            .find_by_external_id(&actor.external_user_id)
            .await?
            .ok_or_else(|| {
                EngineError::not_found(format!("no profile for user {}", actor.external_user_id))
            })?;

        let user_settings = self
            .user_settings
            .find(&actor.external_user_id)
            .await?
            .unwrap_or_default();

        let org_settings = match actor.resolve_org(organization_id) {
            Some(org) => self.org_scope(org).await?,
            None => SettingsMap::new(),
        };

        Ok(SettingsBundle {
            profile,
            user_settings,
            org_settings,
        })
    }

    async fn org_scope(&self, external_org_id: &str) -> Result<SettingsMap> {
        match self.mappings.find_by_external_org(external_org_id).await? {
            Some(mapping) => Ok(self
                .org_settings
                .find(mapping.internal_id)
                .await?
                .unwrap_or_default()),
            None => {
                debug!(
                    "Organization {} has no local mapping, org scope empty",
                    external_org_id
                );
                Ok(SettingsMap::new())
            }
        }
    }

    /// Apply a settings write.
    ///
    /// Authorization runs before any scope is written, so a rejected org
    /// scope never leaves a half-applied user scope behind. An org-scope
    /// write against an unmapped organization is accepted and dropped
    /// with a warning; the provider considers the organization real even
    /// when this service has nothing to attach its settings to.
    pub async fn write(
        &self,
        actor: &ActorContext,
        organization_id: Option<&str>,
        update: SettingsUpdate,
    ) -> Result<()> {
        if update.user_settings.is_none() && update.org_settings.is_none() {
            return Err(EngineError::validation(
                "nothing to update: request carries no settings scope",
            ));
        }

        let known = self
            .profiles
            .find_by_external_id(&actor.external_user_id)
            .await?
            .is_some();
        if !known {
            return Err(EngineError::not_found(format!(
                "no profile for user {}",
                actor.external_user_id
            )));
        }

        let org_target = if update.org_settings.is_some() {
            let Some(org) = actor.resolve_org(organization_id) else {
                return Err(EngineError::validation(
                    "organization settings update requires an organization",
                ));
            };

            let class = self.resolver.resolve(&actor.external_user_id, org).await?;
            self.metrics.capability_resolved(class.as_str());
            if !class.is_admin() {
                self.metrics.admin_denied("org_settings_write");
                return Err(EngineError::forbidden(
                    "organization settings can only be changed by an organization admin",
                ));
            }

            match self.mappings.find_by_external_org(org).await? {
                Some(mapping) => Some(mapping.internal_id),
                None => {
                    warn!("Organization settings write dropped: no mapping for {}", org);
                    None
                }
            }
        } else {
            None
        };

        if let Some(ref settings) = update.user_settings {
            self.user_settings
                .upsert(&actor.external_user_id, settings)
                .await?;
        }

        if let (Some(internal_id), Some(settings)) = (org_target, update.org_settings.as_ref()) {
            self.org_settings.upsert(internal_id, settings).await?;
        }

        Ok(())
    }
}
