//! Events raised when a task changes completion state.

use super::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of completion change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEventKind {
    /// The task was marked done.
    Done,
    /// The task was marked undone.
    Undone,
}

impl TaskEventKind {
    /// Returns the canonical name of the event kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Done => "task_done",
            Self::Undone => "task_undone",
        }
    }
}

impl fmt::Display for TaskEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a task completion change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEvent {
    task_id: TaskId,
    kind: TaskEventKind,
    occurred_at: DateTime<Utc>,
}

impl TaskEvent {
    /// Builds the event matching a task's new completion state.
    #[must_use]
    pub fn changed(task_id: TaskId, done: bool, clock: &impl Clock) -> Self {
        let kind = if done {
            TaskEventKind::Done
        } else {
            TaskEventKind::Undone
        };
        Self {
            task_id,
            kind,
            occurred_at: clock.utc(),
        }
    }

    /// Returns the affected task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the kind of change.
    #[must_use]
    pub const fn kind(&self) -> TaskEventKind {
        self.kind
    }

    /// Returns when the change happened.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
