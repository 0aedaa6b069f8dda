//! Task group aggregate root.

use super::{Task, TaskEvent, TaskGroupDomainError, TaskGroupId, TaskId, TaskUpdate};
use crate::project::domain::ProjectId;
use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A bundle of tasks sharing a lifecycle and a deadline.
///
/// The group deadline is the earliest deadline among its tasks and is fixed
/// when the group is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGroup {
    id: Option<TaskGroupId>,
    description: String,
    deadline: Option<NaiveDateTime>,
    done: bool,
    project_id: Option<ProjectId>,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskGroupData {
    /// Persisted group identifier.
    pub id: TaskGroupId,
    /// Persisted description.
    pub description: String,
    /// Persisted group deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Persisted completion flag.
    pub done: bool,
    /// Project the group was instantiated from, if any.
    pub project_id: Option<ProjectId>,
    /// Persisted tasks.
    pub tasks: Vec<Task>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskGroup {
    /// Creates a new undone group owning `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupDomainError::EmptyGroupDescription`] when the
    /// description is blank.
    pub fn new(
        description: impl Into<String>,
        tasks: Vec<Task>,
        clock: &impl Clock,
    ) -> Result<Self, TaskGroupDomainError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskGroupDomainError::EmptyGroupDescription);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: None,
            description: trimmed.to_owned(),
            deadline: tasks.iter().map(Task::deadline).min(),
            done: false,
            project_id: None,
            tasks,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Links the group to the project it was instantiated from.
    #[must_use]
    pub const fn for_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Reconstructs a group from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskGroupData) -> Self {
        Self {
            id: Some(data.id),
            description: data.description,
            deadline: data.deadline,
            done: data.done,
            project_id: data.project_id,
            tasks: data.tasks,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Assigns store identity to the group and to any task without one.
    ///
    /// Every task is linked to `id`; tasks that already carry an identifier
    /// keep it.
    #[must_use]
    pub fn assign_identity(self, id: TaskGroupId, mut next_task_id: impl FnMut() -> TaskId) -> Self {
        let tasks = self
            .tasks
            .into_iter()
            .map(|task| {
                let task_id = task.id().unwrap_or_else(&mut next_task_id);
                task.with_identity(task_id, id)
            })
            .collect();
        Self {
            id: Some(id),
            tasks,
            ..self
        }
    }

    /// Returns the group identifier once persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskGroupId> {
        self.id
    }

    /// Returns the group description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the earliest task deadline, or `None` for a group without
    /// tasks.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDateTime> {
        self.deadline
    }

    /// Returns true when the group is complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the originating project, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the owned tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true when any task is still undone.
    #[must_use]
    pub fn has_undone_tasks(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_done())
    }

    /// Flips the group's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupDomainError::UnsavedGroup`] for a group without
    /// identity, or [`TaskGroupDomainError::GroupHasUndoneTasks`] while any
    /// task is undone.
    pub fn toggle(&mut self, clock: &impl Clock) -> Result<(), TaskGroupDomainError> {
        let id = self.id.ok_or(TaskGroupDomainError::UnsavedGroup)?;
        if self.has_undone_tasks() {
            return Err(TaskGroupDomainError::GroupHasUndoneTasks(id));
        }
        self.done = !self.done;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Flips the completion flag of one task and reports the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupDomainError::UnsavedGroup`] for a group without
    /// identity, or [`TaskGroupDomainError::TaskNotFound`] when the task is
    /// not part of this group.
    pub fn toggle_task(
        &mut self,
        task_id: TaskId,
        clock: &impl Clock,
    ) -> Result<TaskEvent, TaskGroupDomainError> {
        let group_id = self.id.ok_or(TaskGroupDomainError::UnsavedGroup)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == Some(task_id))
            .ok_or(TaskGroupDomainError::TaskNotFound { group_id, task_id })?;
        let done = task.toggle(clock);
        self.updated_at = clock.utc();
        Ok(TaskEvent::changed(task_id, done, clock))
    }

    /// Replaces one task's editable fields.
    ///
    /// The group deadline is not recomputed: it stays at the earliest task
    /// deadline observed when the group was created.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupDomainError::UnsavedGroup`] for a group without
    /// identity, [`TaskGroupDomainError::TaskNotFound`] when the task is not
    /// part of this group, or [`TaskGroupDomainError::EmptyTaskDescription`]
    /// for a blank description.
    pub fn update_task(
        &mut self,
        task_id: TaskId,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<&Task, TaskGroupDomainError> {
        let group_id = self.id.ok_or(TaskGroupDomainError::UnsavedGroup)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == Some(task_id))
            .ok_or(TaskGroupDomainError::TaskNotFound { group_id, task_id })?;
        task.update_from(update, clock)?;
        self.updated_at = clock.utc();
        Ok(task)
    }
}
