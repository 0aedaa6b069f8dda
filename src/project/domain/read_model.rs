//! Read-only projections of projects.

use super::{Project, ProjectId, ProjectStep};
use serde::Serialize;

/// Immutable view of a project returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReadModel {
    /// Project identifier, absent only for unsaved projects.
    pub id: Option<ProjectId>,
    /// Project description.
    pub description: String,
    /// Step templates in insertion order.
    pub steps: Vec<ProjectStepReadModel>,
}

/// Immutable view of a project step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStepReadModel {
    /// Step description.
    pub description: String,
    /// Deadline offset in days.
    pub days_to_deadline: i32,
}

impl From<&Project> for ProjectReadModel {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            description: project.description().to_owned(),
            steps: project.steps().iter().map(ProjectStepReadModel::from).collect(),
        }
    }
}

impl From<&ProjectStep> for ProjectStepReadModel {
    fn from(step: &ProjectStep) -> Self {
        Self {
            description: step.description().to_owned(),
            days_to_deadline: step.days_to_deadline(),
        }
    }
}
