use crate::error::Result;
use crate::metrics::Metrics;

use idsync_core::models::audit_entry::actions;
use idsync_core::{ActorContext, AuditEntry, Organization};
use idsync_db::{AuditLogRepository, OrgMappingRepository};
use idsync_provider::{CreateOrganizationParams, ProviderApi};

use std::sync::Arc;

use log::{info, warn};

/// Creates organizations at the provider and registers the local
/// mapping that org-scoped data hangs off.
#[derive(Clone)]
pub struct OrganizationService {
    provider: Arc<dyn ProviderApi>,
    mappings: OrgMappingRepository,
    audit: AuditLogRepository,
    metrics: Metrics,
}

impl OrganizationService {
    pub fn new(
        provider: Arc<dyn ProviderApi>,
        mappings: OrgMappingRepository,
        audit: AuditLogRepository,
        metrics: Metrics,
    ) -> Self {
        Self {
            provider,
            mappings,
            audit,
            metrics,
        }
    }

    /// Create an organization with the caller as its creator, and
    /// onboard it locally in the same call so org-scoped settings have
    /// somewhere to land.
    pub async fn create(
        &self,
        actor: &ActorContext,
        name: &str,
        slug: &str,
    ) -> Result<Organization> {
        Organization::validate_name(name)?;
        Organization::validate_slug(slug)?;

        let organization = self
            .provider
            .create_organization(CreateOrganizationParams {
                name: name.trim().to_string(),
                slug: slug.to_string(),
                created_by: actor.external_user_id.clone(),
            })
            .await?;

        let mapping = self.mappings.create(&organization.id).await?;

        if let Err(e) = self
            .audit
            .record(
                &AuditEntry::new(
                    &organization.id,
                    &actor.external_user_id,
                    actions::ORGANIZATION_CREATED,
                )
                .with_target(&organization.slug),
            )
            .await
        {
            warn!(
                "Audit write failed: action={} org={}: {}",
                actions::ORGANIZATION_CREATED,
                organization.id,
                e
            );
        }
        self.metrics.admin_action("create_organization");
        info!(
            "Organization created: id={} slug={} internal_id={} by={}",
            organization.id, organization.slug, mapping.internal_id, actor.external_user_id
        );

        Ok(organization)
    }
}
