//! Read-only projections of task groups.
//!
//! Projections are detached copies: mutating one never reaches the stored
//! group.

use super::{Task, TaskGroup, TaskGroupId};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Immutable view of a task group returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReadModel {
    /// Group identifier, absent only for unsaved groups.
    pub id: Option<TaskGroupId>,
    /// Group description.
    pub description: String,
    /// Earliest task deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Task views in group order.
    pub tasks: Vec<GroupTaskReadModel>,
}

/// Immutable view of a task within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTaskReadModel {
    /// Task description.
    pub description: String,
    /// Absolute task deadline.
    pub deadline: NaiveDateTime,
    /// Completion flag.
    pub done: bool,
}

impl From<&TaskGroup> for GroupReadModel {
    fn from(group: &TaskGroup) -> Self {
        Self {
            id: group.id(),
            description: group.description().to_owned(),
            deadline: group.deadline(),
            tasks: group.tasks().iter().map(GroupTaskReadModel::from).collect(),
        }
    }
}

impl From<&Task> for GroupTaskReadModel {
    fn from(task: &Task) -> Self {
        Self {
            description: task.description().to_owned(),
            deadline: task.deadline(),
            done: task.is_done(),
        }
    }
}
