//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{NewProjectRow, NewProjectStepRow, ProjectRow, ProjectStepRow},
    schema::{project_steps, projects},
};
use crate::project::{
    domain::{PersistedProjectData, Project, ProjectId, ProjectStep, ProjectStepId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

impl From<DieselError> for ProjectRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()?;
            let Some(project_row) = row else {
                return Ok(None);
            };
            let mut hydrated = hydrate(connection, vec![project_row])?;
            Ok(hydrated.pop())
        })
        .await
    }

    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)?;
            hydrate(connection, rows)
        })
        .await
    }

    async fn save(&self, project: Project) -> ProjectRepositoryResult<Project> {
        self.run_blocking(move |connection| {
            let project_id =
                connection.transaction::<_, ProjectRepositoryError, _>(|tx| {
                    write_project(tx, &project)
                })?;

            let row = projects::table
                .find(project_id)
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)?;
            let mut saved = hydrate(connection, vec![row])?;
            saved
                .pop()
                .ok_or(ProjectRepositoryError::NotFound(ProjectId::new(project_id)))
        })
        .await
    }
}

/// Inserts or updates the project row and reconciles its steps.
fn write_project(
    connection: &mut PgConnection,
    project: &Project,
) -> ProjectRepositoryResult<i32> {
    let project_id = match project.id() {
        Some(id) => {
            let updated = diesel::update(projects::table.find(id.value()))
                .set(projects::description.eq(project.description()))
                .execute(connection)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            id.value()
        }
        None => diesel::insert_into(projects::table)
            .values(&NewProjectRow {
                description: project.description().to_owned(),
            })
            .returning(projects::id)
            .get_result::<i32>(connection)?,
    };

    let kept_step_ids: Vec<i32> = project
        .steps()
        .iter()
        .filter_map(ProjectStep::id)
        .map(ProjectStepId::value)
        .collect();
    diesel::delete(
        project_steps::table
            .filter(project_steps::project_id.eq(project_id))
            .filter(project_steps::id.ne_all(kept_step_ids)),
    )
    .execute(connection)?;

    for step in project.steps() {
        match step.id() {
            Some(step_id) => {
                let updated = diesel::update(
                    project_steps::table
                        .find(step_id.value())
                        .filter(project_steps::project_id.eq(project_id)),
                )
                .set((
                    project_steps::description.eq(step.description()),
                    project_steps::days_to_deadline.eq(step.days_to_deadline()),
                ))
                .execute(connection)?;
                if updated == 0 {
                    return Err(ProjectRepositoryError::ForeignStep(step_id));
                }
            }
            None => {
                diesel::insert_into(project_steps::table)
                    .values(&NewProjectStepRow {
                        description: step.description().to_owned(),
                        days_to_deadline: step.days_to_deadline(),
                        project_id,
                    })
                    .execute(connection)?;
            }
        }
    }

    Ok(project_id)
}

/// Loads the steps for the given project rows and assembles aggregates.
fn hydrate(
    connection: &mut PgConnection,
    rows: Vec<ProjectRow>,
) -> ProjectRepositoryResult<Vec<Project>> {
    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let step_rows = project_steps::table
        .filter(project_steps::project_id.eq_any(ids))
        .order(project_steps::id.asc())
        .select(ProjectStepRow::as_select())
        .load::<ProjectStepRow>(connection)?;

    let mut steps_by_project: HashMap<i32, Vec<ProjectStepRow>> = HashMap::new();
    for step_row in step_rows {
        steps_by_project
            .entry(step_row.project_id)
            .or_default()
            .push(step_row);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let steps = steps_by_project.remove(&row.id).unwrap_or_default();
            rows_to_project(row, steps)
        })
        .collect())
}

pub(crate) fn rows_to_project(row: ProjectRow, step_rows: Vec<ProjectStepRow>) -> Project {
    let steps = step_rows
        .into_iter()
        .map(|step| {
            ProjectStep::from_persisted(
                ProjectStepId::new(step.id),
                step.description,
                step.days_to_deadline,
            )
        })
        .collect();

    Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(row.id),
        description: row.description,
        steps,
    })
}
