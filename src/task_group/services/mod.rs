//! Application services for task group orchestration.

mod group;

pub use group::{
    CreateGroupRequest, TaskGroupService, TaskGroupServiceError, TaskGroupServiceResult,
};
