//! Step templates owned by a project.

use super::{ProjectDomainError, ProjectStepId};
use serde::{Deserialize, Serialize};

/// A description plus a day offset relative to a group's reference date.
///
/// Negative offsets place the deadline before the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectStep {
    id: Option<ProjectStepId>,
    description: String,
    days_to_deadline: i32,
}

impl ProjectStep {
    /// Creates a new, not yet persisted step.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyStepDescription`] when the
    /// description is blank.
    pub fn new(
        description: impl Into<String>,
        days_to_deadline: i32,
    ) -> Result<Self, ProjectDomainError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyStepDescription);
        }
        Ok(Self {
            id: None,
            description: trimmed.to_owned(),
            days_to_deadline,
        })
    }

    /// Reconstructs a step from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: ProjectStepId,
        description: String,
        days_to_deadline: i32,
    ) -> Self {
        Self {
            id: Some(id),
            description,
            days_to_deadline,
        }
    }

    /// Returns the step identifier once persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ProjectStepId> {
        self.id
    }

    /// Returns the step description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the deadline offset in days.
    #[must_use]
    pub const fn days_to_deadline(&self) -> i32 {
        self.days_to_deadline
    }

    /// Returns true when both steps describe the same template, ignoring
    /// identity.
    #[must_use]
    pub fn same_template(&self, other: &Self) -> bool {
        self.description == other.description && self.days_to_deadline == other.days_to_deadline
    }

    pub(crate) const fn with_id(mut self, id: ProjectStepId) -> Self {
        self.id = Some(id);
        self
    }
}
