//! `PostgreSQL` adapters for task group persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskGroupRepository, TaskGroupPgPool};

#[cfg(test)]
pub(crate) use models::{TaskGroupRow, TaskRow};
#[cfg(test)]
pub(crate) use repository::{group_changes, rows_to_group};
