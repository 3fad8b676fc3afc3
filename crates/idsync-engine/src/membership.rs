use crate::error::{EngineError, Result};
use crate::metrics::Metrics;

use idsync_auth::{AuthorizationResolver, MEMBERSHIP_PAGE_SIZE};
use idsync_core::models::audit_entry::actions;
use idsync_core::{ActorContext, AuditEntry, OrgInvitation, OrgMembership, roles};
use idsync_db::AuditLogRepository;
use idsync_provider::{CreateInvitationParams, ProviderApi};

use std::sync::Arc;

use log::{info, warn};

/// How a membership ended: the member walked out, or an admin showed
/// them the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalKind {
    Left,
    Removed,
}

impl RemovalKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Left => "left",
            Self::Removed => "removed",
        }
    }
}

/// Membership administration against the provider.
///
/// The provider stays authoritative for memberships; nothing here is
/// persisted locally except the audit trail.
#[derive(Clone)]
pub struct MembershipService {
    provider: Arc<dyn ProviderApi>,
    resolver: AuthorizationResolver,
    audit: AuditLogRepository,
    metrics: Metrics,
    page_size: u32,
}

impl MembershipService {
    pub fn new(
        provider: Arc<dyn ProviderApi>,
        resolver: AuthorizationResolver,
        audit: AuditLogRepository,
        metrics: Metrics,
    ) -> Self {
        Self {
            provider,
            resolver,
            audit,
            metrics,
            page_size: MEMBERSHIP_PAGE_SIZE,
        }
    }

    /// List an organization's memberships.
    ///
    /// Any member may list; the caller's own presence in the fetched
    /// page is the gate, so listing costs a single provider read.
    pub async fn list_members(
        &self,
        actor: &ActorContext,
        organization_id: &str,
    ) -> Result<Vec<OrgMembership>> {
        let memberships = self
            .provider
            .list_memberships(organization_id, self.page_size)
            .await?;

        let caller_present = memberships
            .iter()
            .any(|m| m.user_id == actor.external_user_id);
        if !caller_present {
            self.metrics.admin_denied("list_members");
            return Err(EngineError::forbidden(
                "only members can list an organization's members",
            ));
        }

        Ok(memberships)
    }

    /// Invite an email address into the organization. Admin only.
    /// `role` defaults to basic membership when not given.
    pub async fn invite(
        &self,
        actor: &ActorContext,
        organization_id: &str,
        email: &str,
        role: Option<&str>,
    ) -> Result<OrgInvitation> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(EngineError::validation(format!(
                "invalid invitee email: {email:?}"
            )));
        }

        let role = role.unwrap_or(roles::BASIC_MEMBER);
        if !roles::is_assignable(role) {
            return Err(EngineError::validation(format!(
                "unknown membership role: {role:?}"
            )));
        }

        self.require_admin(actor, organization_id, "invite").await?;

        let invitation = self
            .provider
            .create_invitation(
                organization_id,
                CreateInvitationParams {
                    email_address: email.to_string(),
                    role: role.to_string(),
                    inviter_user_id: actor.external_user_id.clone(),
                },
            )
            .await?;

        self.record_audit(
            AuditEntry::new(organization_id, &actor.external_user_id, actions::MEMBER_INVITED)
                .with_target(email)
                .with_detail(role),
        )
        .await;
        self.metrics.admin_action("invite");
        info!(
            "Member invited: org={} email={} role={} by={}",
            organization_id, email, role, actor.external_user_id
        );

        Ok(invitation)
    }

    /// Change a member's provider role. Admin only; holding a membership
    /// is not enough to modify other members.
    pub async fn update_role(
        &self,
        actor: &ActorContext,
        organization_id: &str,
        membership_id: &str,
        role: &str,
    ) -> Result<OrgMembership> {
        if !roles::is_assignable(role) {
            return Err(EngineError::validation(format!(
                "unknown membership role: {role:?}"
            )));
        }

        self.require_admin(actor, organization_id, "update_role")
            .await?;

        let membership = self
            .provider
            .update_membership_role(organization_id, membership_id, role)
            .await?;

        self.record_audit(
            AuditEntry::new(
                organization_id,
                &actor.external_user_id,
                actions::MEMBER_ROLE_UPDATED,
            )
            .with_target(membership_id)
            .with_detail(role),
        )
        .await;
        self.metrics.admin_action("update_role");
        info!(
            "Member role updated: org={} membership={} role={} by={}",
            organization_id, membership_id, role, actor.external_user_id
        );

        Ok(membership)
    }

    /// End a membership.
    ///
    /// Naming a membership id removes that member and requires admin
    /// capability. Naming the caller's own user id instead is a
    /// self-service leave and needs no capability. Naming someone
    /// else's user id is rejected; removals address memberships.
    pub async fn remove(
        &self,
        actor: &ActorContext,
        organization_id: &str,
        membership_id: Option<&str>,
        target_user_id: Option<&str>,
    ) -> Result<RemovalKind> {
        match (membership_id, target_user_id) {
            (Some(membership_id), _) => {
                self.require_admin(actor, organization_id, "remove_member")
                    .await?;

                self.provider
                    .delete_membership(organization_id, membership_id)
                    .await?;

                self.record_audit(
                    AuditEntry::new(
                        organization_id,
                        &actor.external_user_id,
                        actions::MEMBER_REMOVED,
                    )
                    .with_target(membership_id),
                )
                .await;
                self.metrics.admin_action("remove_member");
                info!(
                    "Member removed: org={} membership={} by={}",
                    organization_id, membership_id, actor.external_user_id
                );

                Ok(RemovalKind::Removed)
            }
            (None, Some(user_id)) if user_id == actor.external_user_id => {
                self.leave(actor, organization_id).await
            }
            (None, Some(_)) => Err(EngineError::validation(
                "removing another member requires their membership id",
            )),
            (None, None) => Err(EngineError::validation(
                "specify a membership id or a target user id",
            )),
        }
    }

    async fn leave(&self, actor: &ActorContext, organization_id: &str) -> Result<RemovalKind> {
        let memberships = self
            .provider
            .list_memberships(organization_id, self.page_size)
            .await?;

        let own = memberships
            .into_iter()
            .find(|m| m.user_id == actor.external_user_id)
            .ok_or_else(|| {
                EngineError::not_found(format!(
                    "user {} has no membership in {}",
                    actor.external_user_id, organization_id
                ))
            })?;

        self.provider
            .delete_membership(organization_id, &own.id)
            .await?;

        self.record_audit(
            AuditEntry::new(organization_id, &actor.external_user_id, actions::MEMBER_LEFT)
                .with_target(&own.id),
        )
        .await;
        info!(
            "Member left: org={} membership={} user={}",
            organization_id, own.id, actor.external_user_id
        );

        Ok(RemovalKind::Left)
    }

    /// Hand the owner role to another member and step the caller down
    /// to plain admin.
    ///
    /// The two provider writes are not atomic. When the promotion lands
    /// but the demotion fails, the error names the partial state so an
    /// operator can finish the job by hand.
    pub async fn transfer_ownership(
        &self,
        actor: &ActorContext,
        organization_id: &str,
        new_owner_user_id: &str,
    ) -> Result<()> {
        if new_owner_user_id == actor.external_user_id {
            return Err(EngineError::validation(
                "cannot transfer ownership to yourself",
            ));
        }

        let memberships = self
            .provider
            .list_memberships(organization_id, self.page_size)
            .await?;

        let caller = memberships
            .iter()
            .find(|m| m.user_id == actor.external_user_id)
            .ok_or_else(|| {
                EngineError::forbidden(format!(
                    "caller has no membership in {}",
                    organization_id
                ))
            })?;

        let class = caller.capability();
        self.metrics.capability_resolved(class.as_str());
        if !class.is_admin() {
            self.metrics.admin_denied("transfer_ownership");
            return Err(EngineError::forbidden(
                "transfer_ownership requires organization admin capability",
            ));
        }

        let new_owner = memberships
            .iter()
            .find(|m| m.user_id == new_owner_user_id)
            .ok_or_else(|| {
                EngineError::not_found(format!(
                    "user {} has no membership in {}",
                    new_owner_user_id, organization_id
                ))
            })?;

        self.provider
            .update_membership_role(organization_id, &new_owner.id, roles::OWNER)
            .await?;

        if let Err(e) = self
            .provider
            .update_membership_role(organization_id, &caller.id, roles::ADMIN)
            .await
        {
            return Err(EngineError::transfer_incomplete(
                organization_id,
                new_owner_user_id,
                e,
            ));
        }

        self.record_audit(
            AuditEntry::new(
                organization_id,
                &actor.external_user_id,
                actions::OWNERSHIP_TRANSFERRED,
            )
            .with_target(new_owner_user_id),
        )
        .await;
        self.metrics.admin_action("transfer_ownership");
        info!(
            "Ownership transferred: org={} from={} to={}",
            organization_id, actor.external_user_id, new_owner_user_id
        );

        Ok(())
    }

    async fn require_admin(
        &self,
        actor: &ActorContext,
        organization_id: &str,
        operation: &'static str,
    ) -> Result<()> {
        let class = self
            .resolver
            .resolve(&actor.external_user_id, organization_id)
            .await?;
        self.metrics.capability_resolved(class.as_str());

        if !class.is_admin() {
            self.metrics.admin_denied(operation);
            return Err(EngineError::forbidden(format!(
                "{} requires organization admin capability",
                operation
            )));
        }

        Ok(())
    }

    /// Audit writes never fail the operation they describe.
    async fn record_audit(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.record(&entry).await {
            warn!(
                "Audit write failed: action={} org={}: {}",
                entry.action, entry.organization_id, e
            );
        }
    }
}
