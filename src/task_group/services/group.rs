//! Service layer for free-standing task groups and completion toggles.

use crate::task_group::{
    domain::{
        GroupReadModel, GroupTaskReadModel, Task, TaskEvent, TaskGroup, TaskGroupDomainError,
        TaskGroupId, TaskId, TaskUpdate,
    },
    ports::{TaskGroupRepository, TaskGroupRepositoryError},
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a group from an explicit task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupRequest {
    description: String,
    tasks: Vec<(String, NaiveDateTime)>,
}

impl CreateGroupRequest {
    /// Creates a request with a description and no tasks.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tasks: Vec::new(),
        }
    }

    /// Appends a task.
    #[must_use]
    pub fn with_task(mut self, description: impl Into<String>, deadline: NaiveDateTime) -> Self {
        self.tasks.push((description.into(), deadline));
        self
    }
}

/// Service-level errors for task group operations.
#[derive(Debug, Error)]
pub enum TaskGroupServiceError {
    /// No group exists for the requested identifier.
    #[error("task group with id {0} not found")]
    GroupNotFound(TaskGroupId),
    /// Domain validation or a state rule failed.
    #[error(transparent)]
    Domain(#[from] TaskGroupDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskGroupRepositoryError),
}

/// Result type for task group service operations.
pub type TaskGroupServiceResult<T> = Result<T, TaskGroupServiceError>;

/// Task group orchestration service.
#[derive(Clone)]
pub struct TaskGroupService<R, C>
where
    R: TaskGroupRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskGroupService<R, C>
where
    R: TaskGroupRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task group service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a group that is not linked to any project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupServiceError::Domain`] when a description is
    /// blank, or [`TaskGroupServiceError::Repository`] when persistence
    /// fails.
    pub async fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> TaskGroupServiceResult<GroupReadModel> {
        let CreateGroupRequest {
            description,
            tasks: task_specs,
        } = request;
        let tasks = task_specs
            .into_iter()
            .map(|(task_description, deadline)| Task::new(task_description, deadline, &*self.clock))
            .collect::<Result<Vec<_>, _>>()?;
        let group = TaskGroup::new(description, tasks, &*self.clock)?;

        let saved = self.repository.save(group).await?;
        tracing::info!(group_id = ?saved.id(), tasks = saved.tasks().len(), "created task group");
        Ok(GroupReadModel::from(&saved))
    }

    /// Returns projections of every stored group.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupServiceError::Repository`] when the lookup fails.
    pub async fn read_all(&self) -> TaskGroupServiceResult<Vec<GroupReadModel>> {
        let groups = self.repository.find_all().await?;
        Ok(groups.iter().map(GroupReadModel::from).collect())
    }

    /// Flips a group's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupServiceError::GroupNotFound`] for an unknown
    /// group, or [`TaskGroupDomainError::GroupHasUndoneTasks`] (as
    /// [`TaskGroupServiceError::Domain`]) while any task is undone.
    pub async fn toggle_group(&self, group_id: TaskGroupId) -> TaskGroupServiceResult<()> {
        let mut group = self.find_group(group_id).await?;
        group.toggle(&*self.clock)?;
        let saved = self.repository.save(group).await?;
        tracing::info!(%group_id, done = saved.is_done(), "toggled task group");
        Ok(())
    }

    /// Flips one task's completion flag and returns the resulting event.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupServiceError::GroupNotFound`] for an unknown
    /// group, or [`TaskGroupDomainError::TaskNotFound`] (as
    /// [`TaskGroupServiceError::Domain`]) when the task is not in the group.
    pub async fn toggle_task(
        &self,
        group_id: TaskGroupId,
        task_id: TaskId,
    ) -> TaskGroupServiceResult<TaskEvent> {
        let mut group = self.find_group(group_id).await?;
        let event = group.toggle_task(task_id, &*self.clock)?;
        self.repository.save(group).await?;
        tracing::info!(
            %group_id,
            task_id = %event.task_id(),
            event = %event.kind(),
            occurred_at = %event.occurred_at(),
            "task completion changed"
        );
        Ok(event)
    }

    /// Replaces one task's description, completion flag, and deadline.
    ///
    /// The group's own deadline is left as it was at creation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupServiceError::GroupNotFound`] for an unknown
    /// group, or [`TaskGroupServiceError::Domain`] when the task is not in
    /// the group or the new description is blank.
    pub async fn update_task(
        &self,
        group_id: TaskGroupId,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> TaskGroupServiceResult<GroupTaskReadModel> {
        let mut group = self.find_group(group_id).await?;
        let view = GroupTaskReadModel::from(group.update_task(task_id, update, &*self.clock)?);
        self.repository.save(group).await?;
        tracing::info!(%group_id, %task_id, done = view.done, "updated task");
        Ok(view)
    }

    async fn find_group(&self, group_id: TaskGroupId) -> TaskGroupServiceResult<TaskGroup> {
        self.repository
            .find_by_id(group_id)
            .await?
            .ok_or(TaskGroupServiceError::GroupNotFound(group_id))
    }
}
