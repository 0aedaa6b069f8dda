//! Project aggregate root.

use super::{ProjectDomainError, ProjectId, ProjectStep, ProjectStepId};
use serde::{Deserialize, Serialize};

/// A described plan owning a set of step templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: Option<ProjectId>,
    description: String,
    steps: Vec<ProjectStep>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted description.
    pub description: String,
    /// Persisted steps, each with its own identifier.
    pub steps: Vec<ProjectStep>,
}

impl Project {
    /// Creates a new, not yet persisted project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyDescription`] when the description
    /// is blank, or [`ProjectDomainError::DuplicateStep`] when two steps share
    /// a description and offset.
    pub fn new(
        description: impl Into<String>,
        steps: impl IntoIterator<Item = ProjectStep>,
    ) -> Result<Self, ProjectDomainError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyDescription);
        }

        let mut unique: Vec<ProjectStep> = Vec::new();
        for step in steps {
            if unique.iter().any(|existing| existing.same_template(&step)) {
                return Err(ProjectDomainError::DuplicateStep {
                    description: step.description().to_owned(),
                    days_to_deadline: step.days_to_deadline(),
                });
            }
            unique.push(step);
        }

        Ok(Self {
            id: None,
            description: trimmed.to_owned(),
            steps: unique,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: Some(data.id),
            description: data.description,
            steps: data.steps,
        }
    }

    /// Assigns store identity to the project and to any step without one.
    ///
    /// Steps that already carry an identifier keep it.
    #[must_use]
    pub fn assign_identity(
        self,
        id: ProjectId,
        mut next_step_id: impl FnMut() -> ProjectStepId,
    ) -> Self {
        let steps = self
            .steps
            .into_iter()
            .map(|step| match step.id() {
                Some(_) => step,
                None => step.with_id(next_step_id()),
            })
            .collect();
        Self {
            id: Some(id),
            description: self.description,
            steps,
        }
    }

    /// Returns the project identifier once persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ProjectId> {
        self.id
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the step templates.
    #[must_use]
    pub fn steps(&self) -> &[ProjectStep] {
        &self.steps
    }
}
