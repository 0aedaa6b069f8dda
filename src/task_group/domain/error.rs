//! Error types for task group domain validation and state changes.

use super::{TaskGroupId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating task groups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskGroupDomainError {
    /// The group description is empty after trimming.
    #[error("task group description must not be empty")]
    EmptyGroupDescription,

    /// A task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// Offsetting the reference date leaves the representable range.
    #[error("deadline offset of {days} days is out of range")]
    DeadlineOutOfRange {
        /// Requested offset in days.
        days: i32,
    },

    /// The group still contains undone tasks.
    #[error("group {0} has undone tasks, complete all tasks first")]
    GroupHasUndoneTasks(TaskGroupId),

    /// The group has not been persisted yet.
    #[error("task group has no identity yet")]
    UnsavedGroup,

    /// The task does not belong to the group.
    #[error("task {task_id} not found in group {group_id}")]
    TaskNotFound {
        /// Group that was searched.
        group_id: TaskGroupId,
        /// Task that was requested.
        task_id: TaskId,
    },
}
