//! Repository port for project persistence and lookup.

use crate::project::domain::{Project, ProjectId, ProjectStepId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every stored project.
    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Stores a project and its steps, assigning identity on first save.
    ///
    /// Saving a project that already has an identifier replaces the stored
    /// record with that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project carries
    /// an identifier that the store does not know, or
    /// [`ProjectRepositoryError::ForeignStep`] when a step carries an
    /// identifier that is not one of the stored project's steps.
    async fn save(&self, project: Project) -> ProjectRepositoryResult<Project>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// A step identifier belongs to another project, or to none.
    #[error("step {0} does not belong to the project being saved")]
    ForeignStep(ProjectStepId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
