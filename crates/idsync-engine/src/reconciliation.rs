use crate::error::SyncError;
use crate::metrics::Metrics;

use idsync_core::{Identity, IdentityChange, IdentityEvent, Profile, SyncOutcome};
use idsync_db::{DbError, ProfileRepository};
use idsync_provider::ProviderApi;

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{info, warn};

/// Mirrors provider identity state into the local datastore.
///
/// Every write is conditional, so redelivered events and racing syncs
/// converge on the same stored state instead of erroring.
#[derive(Clone)]
pub struct ReconciliationEngine {
    provider: Arc<dyn ProviderApi>,
    profiles: ProfileRepository,
    metrics: Metrics,
}

impl ReconciliationEngine {
    pub fn new(provider: Arc<dyn ProviderApi>, profiles: ProfileRepository, metrics: Metrics) -> Self {
        Self {
            provider,
            profiles,
            metrics,
        }
    }

    /// Apply a verified identity event to the datastore.
    ///
    /// The returned outcome names the branch that actually ran, so the
    /// caller can acknowledge redeliveries without treating them as new
    /// work.
    pub async fn apply_event(&self, event: &IdentityEvent) -> Result<SyncOutcome, SyncError> {
        self.metrics.event_received(event.kind().as_str());

        let outcome = match &event.change {
            IdentityChange::Created(identity) => self.apply_created(identity).await?,
            IdentityChange::Updated(identity) => self.apply_updated(identity).await?,
            IdentityChange::Deleted { external_id } => self.apply_deleted(external_id).await?,
        };

        self.metrics.event_applied(outcome.as_str());
        info!(
            "Identity event applied: kind={} user={} delivery={} outcome={}",
            event.kind().as_str(),
            event.external_id(),
            event.delivery_id,
            outcome
        );

        Ok(outcome)
    }

    async fn apply_created(&self, identity: &Identity) -> Result<SyncOutcome, SyncError> {
        let profile = Profile::from_identity(identity);
        let written = self
            .profiles
            .insert_if_absent(&profile)
            .await
            .map_err(|e| SyncError::datastore_write(&identity.external_id, e))?;

        Ok(if written {
            SyncOutcome::Created
        } else {
            SyncOutcome::Duplicate
        })
    }

    async fn apply_updated(&self, identity: &Identity) -> Result<SyncOutcome, SyncError> {
        let updated = self
            .profiles
            .update_mirrored(identity, Utc::now())
            .await
            .map_err(|e| SyncError::datastore_write(&identity.external_id, e))?;

        if updated {
            Ok(SyncOutcome::Updated)
        } else {
            // Out-of-order delivery: the update arrived before the
            // creation. The snapshot is acknowledged and dropped; the
            // creation event or an on-demand sync carries the state.
            warn!(
                "Update for unknown user deferred: user={}",
                identity.external_id
            );
            Ok(SyncOutcome::Deferred)
        }
    }

    async fn apply_deleted(&self, external_id: &str) -> Result<SyncOutcome, SyncError> {
        let removed = self
            .profiles
            .delete_if_present(external_id)
            .await
            .map_err(|e| SyncError::datastore_write(external_id, e))?;

        Ok(if removed {
            SyncOutcome::Deleted
        } else {
            SyncOutcome::AlreadyAbsent
        })
    }

    /// Fetch the user's current provider state and force the local
    /// mirror to match it, creating the profile when none exists.
    /// Application-owned columns are never touched. Returns the stored
    /// profile after the write.
    pub async fn sync_on_demand(&self, external_user_id: &str) -> Result<Profile, SyncError> {
        self.metrics.sync_requested();

        let identity = self
            .provider
            .fetch_user(external_user_id)
            .await
            .map_err(|e| {
                self.metrics.sync_failed("provider_fetch");
                SyncError::provider_fetch(external_user_id, e)
            })?;

        let profile = Profile::from_identity(&identity);
        self.profiles.upsert(&profile).await.map_err(|e| {
            self.metrics.sync_failed("datastore_write");
            SyncError::datastore_write(external_user_id, e)
        })?;

        let stored = self
            .profiles
            .find_by_external_id(external_user_id)
            .await
            .map_err(|e| {
                self.metrics.sync_failed("datastore_read");
                SyncError::datastore_write(external_user_id, e)
            })?;

        match stored {
            Some(profile) => {
                info!("On-demand sync completed: user={}", external_user_id);
                Ok(profile)
            }
            // A concurrent deletion can race the read-back
            None => Err(SyncError::datastore_write(
                external_user_id,
                DbError::Initialization {
                    message: "Profile disappeared between upsert and read".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            )),
        }
    }
}
