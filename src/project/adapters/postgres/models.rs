//! Diesel row models for project persistence.

use super::schema::{project_steps, projects};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: i32,
    /// Project description.
    pub description: String,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project description.
    pub description: String,
}

/// Query result row for project step records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = project_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectStepRow {
    /// Step identifier.
    pub id: i32,
    /// Step description.
    pub description: String,
    /// Deadline offset in days.
    pub days_to_deadline: i32,
    /// Owning project identifier.
    pub project_id: i32,
}

/// Insert model for project step records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_steps)]
pub struct NewProjectStepRow {
    /// Step description.
    pub description: String,
    /// Deadline offset in days.
    pub days_to_deadline: i32,
    /// Owning project identifier.
    pub project_id: i32,
}
