//! Settings port for group creation rules.

/// Read-only source of the group creation flag.
///
/// Services read the flag once per operation and never cache it.
#[cfg_attr(test, mockall::automock)]
pub trait GroupSettings: Send + Sync {
    /// Returns true when a project may have several undone groups at once.
    fn allow_multiple_groups(&self) -> bool;
}
