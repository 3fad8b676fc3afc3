use std::fmt;

/// What a reconciliation step actually did. Logged and returned to
/// callers so redeliveries and races are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A new profile row was written.
    Created,
    /// Creation skipped: the profile already existed.
    Duplicate,
    /// An existing profile's mirrored fields were overwritten.
    Updated,
    /// Update skipped: no profile exists yet for this user.
    Deferred,
    /// The profile row was removed.
    Deleted,
    /// Deletion skipped: no profile existed.
    AlreadyAbsent,
}

impl SyncOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Duplicate => "duplicate",
            Self::Updated => "updated",
            Self::Deferred => "deferred",
            Self::Deleted => "deleted",
            Self::AlreadyAbsent => "already_absent",
        }
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
