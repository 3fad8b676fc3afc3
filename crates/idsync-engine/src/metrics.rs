use metrics::counter;

/// Counters for reconciliation and administration flows.
///
/// All metric names share a prefix so deployments running several
/// services against one exporter stay distinguishable.
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "idsync" }
    }

    /// Record a verified identity event entering the engine
    pub fn event_received(&self, kind: &str) {
        counter!(format!("{}.events.received", self.prefix)).increment(1);
        counter!(format!("{}.events.received.{}", self.prefix, kind)).increment(1);
    }

    /// Record the reconciliation outcome of an applied event
    pub fn event_applied(&self, outcome: &str) {
        counter!(format!("{}.events.applied.{}", self.prefix, outcome)).increment(1);
    }

    /// Record a delivery acknowledged without reconciliation
    pub fn event_ignored(&self) {
        counter!(format!("{}.events.ignored", self.prefix)).increment(1);
    }

    /// Record an on-demand sync request
    pub fn sync_requested(&self) {
        counter!(format!("{}.sync.requested", self.prefix)).increment(1);
    }

    /// Record a failed on-demand sync, tagged by the stage that failed
    pub fn sync_failed(&self, stage: &str) {
        counter!(format!("{}.sync.failed", self.prefix)).increment(1);
        counter!(format!("{}.sync.failed.{}", self.prefix, stage)).increment(1);
    }

    /// Record a capability resolution, tagged by the resolved class
    pub fn capability_resolved(&self, class: &str) {
        counter!(format!("{}.capability.resolved.{}", self.prefix, class)).increment(1);
    }

    /// Record an operation rejected for missing admin capability
    pub fn admin_denied(&self, operation: &str) {
        counter!(format!("{}.admin.denied.{}", self.prefix, operation)).increment(1);
    }

    /// Record a completed administration action
    pub fn admin_action(&self, action: &str) {
        counter!(format!("{}.admin.actions.{}", self.prefix, action)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
