//! Domain model for task groups.
//!
//! A [`TaskGroup`] owns its [`Task`] values directly. The task-to-group and
//! group-to-project links are plain identifiers, so no aggregate holds a
//! second owner of another.

mod deadline;
mod error;
mod event;
mod group;
mod ids;
mod read_model;
mod task;

pub use deadline::deadline_from;
pub use error::TaskGroupDomainError;
pub use event::{TaskEvent, TaskEventKind};
pub use group::{PersistedTaskGroupData, TaskGroup};
pub use ids::{TaskGroupId, TaskId};
pub use read_model::{GroupReadModel, GroupTaskReadModel};
pub use task::{PersistedTaskData, Task, TaskUpdate};
