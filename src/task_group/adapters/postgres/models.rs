//! Diesel row models for task group persistence.

use super::schema::{task_groups, tasks};
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

/// Query result row for task group records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskGroupRow {
    /// Group identifier.
    pub id: i32,
    /// Group description.
    pub description: String,
    /// Earliest task deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Completion flag.
    pub done: bool,
    /// Originating project identifier.
    pub project_id: Option<i32>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task group records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = task_groups)]
#[diesel(treat_none_as_null = true)]
pub struct TaskGroupChanges {
    /// Group description.
    pub description: String,
    /// Earliest task deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Completion flag.
    pub done: bool,
    /// Originating project identifier.
    pub project_id: Option<i32>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i32,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub done: bool,
    /// Absolute deadline.
    pub deadline: NaiveDateTime,
    /// Owning group identifier.
    pub task_group_id: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChanges {
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub done: bool,
    /// Absolute deadline.
    pub deadline: NaiveDateTime,
    /// Owning group identifier.
    pub task_group_id: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
