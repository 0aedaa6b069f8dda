//! Repository port for task group persistence and lookup.

use crate::{
    project::domain::ProjectId,
    task_group::domain::{TaskGroup, TaskGroupId, TaskId},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task group repository operations.
pub type TaskGroupRepositoryResult<T> = Result<T, TaskGroupRepositoryError>;

/// Task group persistence contract.
///
/// Groups are stored together with their tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskGroupRepository: Send + Sync {
    /// Returns true when an undone group instantiated from the project
    /// exists.
    async fn exists_undone_for_project(
        &self,
        project_id: ProjectId,
    ) -> TaskGroupRepositoryResult<bool>;

    /// Finds a group by identifier.
    ///
    /// Returns `None` when the group does not exist.
    async fn find_by_id(&self, id: TaskGroupId) -> TaskGroupRepositoryResult<Option<TaskGroup>>;

    /// Returns every stored group.
    async fn find_all(&self) -> TaskGroupRepositoryResult<Vec<TaskGroup>>;

    /// Stores a group and its tasks, assigning identity on first save.
    ///
    /// Saving a group that already has an identifier replaces the stored
    /// record with that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupRepositoryError::NotFound`] when the group carries
    /// an identifier that the store does not know, or
    /// [`TaskGroupRepositoryError::ForeignTask`] when a task carries an
    /// identifier that is not one of the stored group's tasks.
    async fn save(&self, group: TaskGroup) -> TaskGroupRepositoryResult<TaskGroup>;
}

/// Errors returned by task group repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGroupRepositoryError {
    /// The group was not found.
    #[error("task group not found: {0}")]
    NotFound(TaskGroupId),

    /// A task identifier belongs to another group, or to none.
    #[error("task {0} does not belong to the group being saved")]
    ForeignTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGroupRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
