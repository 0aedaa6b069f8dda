//! `PostgreSQL` repository implementation for task group storage.

use super::{
    models::{TaskChanges, TaskGroupChanges, TaskGroupRow, TaskRow},
    schema::{task_groups, tasks},
};
use crate::{
    project::domain::ProjectId,
    task_group::{
        domain::{
            PersistedTaskData, PersistedTaskGroupData, Task, TaskGroup, TaskGroupId, TaskId,
        },
        ports::{TaskGroupRepository, TaskGroupRepositoryError, TaskGroupRepositoryResult},
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by task group adapters.
pub type TaskGroupPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task group repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskGroupRepository {
    pool: TaskGroupPgPool,
}

impl PostgresTaskGroupRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskGroupPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskGroupRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskGroupRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskGroupRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskGroupRepositoryError::persistence)?
    }
}

impl From<DieselError> for TaskGroupRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskGroupRepository for PostgresTaskGroupRepository {
    async fn exists_undone_for_project(
        &self,
        project_id: ProjectId,
    ) -> TaskGroupRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let exists = diesel::select(diesel::dsl::exists(
                task_groups::table
                    .filter(task_groups::done.eq(false))
                    .filter(task_groups::project_id.eq(project_id.value())),
            ))
            .get_result::<bool>(connection)?;
            Ok(exists)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskGroupId) -> TaskGroupRepositoryResult<Option<TaskGroup>> {
        self.run_blocking(move |connection| load_group(connection, id.value()))
            .await
    }

    async fn find_all(&self) -> TaskGroupRepositoryResult<Vec<TaskGroup>> {
        self.run_blocking(|connection| {
            let rows = task_groups::table
                .order(task_groups::id.asc())
                .select(TaskGroupRow::as_select())
                .load::<TaskGroupRow>(connection)?;
            hydrate(connection, rows)
        })
        .await
    }

    async fn save(&self, group: TaskGroup) -> TaskGroupRepositoryResult<TaskGroup> {
        self.run_blocking(move |connection| {
            let group_id = connection
                .transaction::<_, TaskGroupRepositoryError, _>(|tx| write_group(tx, &group))?;
            load_group(connection, group_id)?
                .ok_or(TaskGroupRepositoryError::NotFound(TaskGroupId::new(group_id)))
        })
        .await
    }
}

/// Inserts or updates the group row and reconciles its tasks.
fn write_group(connection: &mut PgConnection, group: &TaskGroup) -> TaskGroupRepositoryResult<i32> {
    let changes = group_changes(group);
    let group_id = match group.id() {
        Some(id) => {
            let updated = diesel::update(task_groups::table.find(id.value()))
                .set(&changes)
                .execute(connection)?;
            if updated == 0 {
                return Err(TaskGroupRepositoryError::NotFound(id));
            }
            id.value()
        }
        None => diesel::insert_into(task_groups::table)
            .values(&changes)
            .returning(task_groups::id)
            .get_result::<i32>(connection)?,
    };

    let kept_task_ids: Vec<i32> = group
        .tasks()
        .iter()
        .filter_map(Task::id)
        .map(TaskId::value)
        .collect();
    diesel::delete(
        tasks::table
            .filter(tasks::task_group_id.eq(group_id))
            .filter(tasks::id.ne_all(kept_task_ids)),
    )
    .execute(connection)?;

    for task in group.tasks() {
        let row_changes = task_changes(task, group_id);
        match task.id() {
            Some(task_id) => {
                let updated = diesel::update(
                    tasks::table
                        .find(task_id.value())
                        .filter(tasks::task_group_id.eq(group_id)),
                )
                .set(&row_changes)
                .execute(connection)?;
                if updated == 0 {
                    return Err(TaskGroupRepositoryError::ForeignTask(task_id));
                }
            }
            None => {
                diesel::insert_into(tasks::table)
                    .values(&row_changes)
                    .execute(connection)?;
            }
        }
    }

    Ok(group_id)
}

fn load_group(
    connection: &mut PgConnection,
    id: i32,
) -> TaskGroupRepositoryResult<Option<TaskGroup>> {
    let row = task_groups::table
        .find(id)
        .select(TaskGroupRow::as_select())
        .first::<TaskGroupRow>(connection)
        .optional()?;
    let Some(group_row) = row else {
        return Ok(None);
    };
    let mut groups = hydrate(connection, vec![group_row])?;
    Ok(groups.pop())
}

/// Loads the tasks for the given group rows and assembles aggregates.
fn hydrate(
    connection: &mut PgConnection,
    rows: Vec<TaskGroupRow>,
) -> TaskGroupRepositoryResult<Vec<TaskGroup>> {
    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let task_rows = tasks::table
        .filter(tasks::task_group_id.eq_any(ids))
        .order(tasks::id.asc())
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)?;

    let mut tasks_by_group: HashMap<i32, Vec<TaskRow>> = HashMap::new();
    for task_row in task_rows {
        tasks_by_group
            .entry(task_row.task_group_id)
            .or_default()
            .push(task_row);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let group_tasks = tasks_by_group.remove(&row.id).unwrap_or_default();
            rows_to_group(row, group_tasks)
        })
        .collect())
}

pub(crate) fn group_changes(group: &TaskGroup) -> TaskGroupChanges {
    TaskGroupChanges {
        description: group.description().to_owned(),
        deadline: group.deadline(),
        done: group.is_done(),
        project_id: group.project_id().map(ProjectId::value),
        created_at: group.created_at(),
        updated_at: group.updated_at(),
    }
}

fn task_changes(task: &Task, group_id: i32) -> TaskChanges {
    TaskChanges {
        description: task.description().to_owned(),
        done: task.is_done(),
        deadline: task.deadline(),
        task_group_id: group_id,
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

pub(crate) fn rows_to_group(row: TaskGroupRow, task_rows: Vec<TaskRow>) -> TaskGroup {
    let tasks = task_rows
        .into_iter()
        .map(|task_row| {
            Task::from_persisted(PersistedTaskData {
                id: TaskId::new(task_row.id),
                description: task_row.description,
                done: task_row.done,
                deadline: task_row.deadline,
                group_id: TaskGroupId::new(task_row.task_group_id),
                created_at: task_row.created_at,
                updated_at: task_row.updated_at,
            })
        })
        .collect();

    TaskGroup::from_persisted(PersistedTaskGroupData {
        id: TaskGroupId::new(row.id),
        description: row.description,
        deadline: row.deadline,
        done: row.done,
        project_id: row.project_id.map(ProjectId::new),
        tasks,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
