//! Tasks owned by a task group.

use super::{TaskGroupDomainError, TaskGroupId, TaskId};
use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work with an absolute deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    description: String,
    done: bool,
    deadline: NaiveDateTime,
    group_id: Option<TaskGroupId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub done: bool,
    /// Persisted absolute deadline.
    pub deadline: NaiveDateTime,
    /// Owning group identifier.
    pub group_id: TaskGroupId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Replacement values for an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// New description. Surrounding whitespace is trimmed.
    pub description: String,
    /// New completion flag.
    pub done: bool,
    /// New absolute deadline.
    pub deadline: NaiveDateTime,
}

impl TaskUpdate {
    /// Creates an update carrying every editable field.
    #[must_use]
    pub fn new(description: impl Into<String>, done: bool, deadline: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done,
            deadline,
        }
    }
}

impl Task {
    /// Creates a new undone task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupDomainError::EmptyTaskDescription`] when the
    /// description is blank.
    pub fn new(
        description: impl Into<String>,
        deadline: NaiveDateTime,
        clock: &impl Clock,
    ) -> Result<Self, TaskGroupDomainError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskGroupDomainError::EmptyTaskDescription);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: None,
            description: trimmed.to_owned(),
            done: false,
            deadline,
            group_id: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            description: data.description,
            done: data.done,
            deadline: data.deadline,
            group_id: Some(data.group_id),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier once persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true when the task is complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the absolute deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    /// Returns the owning group identifier once persisted.
    #[must_use]
    pub const fn group_id(&self) -> Option<TaskGroupId> {
        self.group_id
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

    /// Replaces the editable fields and refreshes the modification stamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupDomainError::EmptyTaskDescription`] when the new
    /// description is blank. The task is left untouched in that case.
    pub fn update_from(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), TaskGroupDomainError> {
        let TaskUpdate {
            description: raw,
            done,
            deadline,
        } = update;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskGroupDomainError::EmptyTaskDescription);
        }
        self.description = trimmed.to_owned();
        self.done = done;
        self.deadline = deadline;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Flips the completion flag and returns the new value.
    pub(crate) fn toggle(&mut self, clock: &impl Clock) -> bool {
        self.done = !self.done;
        self.updated_at = clock.utc();
        self.done
    }

    pub(crate) fn with_identity(mut self, id: TaskId, group_id: TaskGroupId) -> Self {
        self.id = Some(id);
        self.group_id = Some(group_id);
        self
    }
}
