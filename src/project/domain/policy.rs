//! Group creation policy derived from configuration.

/// Whether a project may have more than one undone task group at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCreationPolicy {
    /// Any number of undone groups may coexist.
    AllowMultiple,
    /// At most one undone group per project.
    SingleUndone,
}

impl GroupCreationPolicy {
    /// Maps the configuration flag to a policy.
    #[must_use]
    pub const fn from_flag(allow_multiple: bool) -> Self {
        if allow_multiple {
            Self::AllowMultiple
        } else {
            Self::SingleUndone
        }
    }

    /// Returns true when the policy depends on the project's undone groups.
    ///
    /// Callers skip the store query entirely when this is false.
    #[must_use]
    pub const fn requires_undone_check(self) -> bool {
        matches!(self, Self::SingleUndone)
    }

    /// Returns true when a new group may be created.
    #[must_use]
    pub const fn permits(self, undone_group_exists: bool) -> bool {
        match self {
            Self::AllowMultiple => true,
            Self::SingleUndone => !undone_group_exists,
        }
    }
}
