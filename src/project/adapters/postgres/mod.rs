//! `PostgreSQL` adapters for project persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresProjectRepository, ProjectPgPool};

#[cfg(test)]
pub(crate) use models::{ProjectRow, ProjectStepRow};
#[cfg(test)]
pub(crate) use repository::rows_to_project;
