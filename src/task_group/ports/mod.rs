//! Port contracts for task groups.
//!
//! Ports define infrastructure-agnostic interfaces used by task group and
//! project services.

pub mod repository;

pub use repository::{TaskGroupRepository, TaskGroupRepositoryError, TaskGroupRepositoryResult};

#[cfg(test)]
pub use repository::MockTaskGroupRepository;
