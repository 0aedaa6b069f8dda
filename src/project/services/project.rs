//! Service layer for project management and group instantiation.
//!
//! Provides [`ProjectService`], whose [`ProjectService::create_group`]
//! turns a project's step templates into a persisted task group.

use crate::{
    project::{
        domain::{
            GroupCreationPolicy, Project, ProjectDomainError, ProjectId, ProjectReadModel,
            ProjectStep,
        },
        ports::{GroupSettings, ProjectRepository, ProjectRepositoryError},
    },
    task_group::{
        domain::{GroupReadModel, Task, TaskGroup, TaskGroupDomainError, deadline_from},
        ports::{TaskGroupRepository, TaskGroupRepositoryError},
    },
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    description: String,
    steps: Vec<(String, i32)>,
}

impl CreateProjectRequest {
    /// Creates a request with a description and no steps.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step template.
    #[must_use]
    pub fn with_step(mut self, description: impl Into<String>, days_to_deadline: i32) -> Self {
        self.steps.push((description.into(), days_to_deadline));
        self
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// The project already has an undone group and the configuration allows
    /// only one.
    #[error("only one undone group per project is allowed (project {0})")]
    SingleUndoneGroupAllowed(ProjectId),
    /// No project exists for the requested identifier.
    #[error("project id not found: {0}")]
    ProjectNotFound(ProjectId),
    /// Project validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Task group construction failed.
    #[error(transparent)]
    GroupDomain(#[from] TaskGroupDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),
    /// Task group repository operation failed.
    #[error(transparent)]
    GroupRepository(#[from] TaskGroupRepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<P, G, S, C>
where
    P: ProjectRepository,
    G: TaskGroupRepository,
    S: GroupSettings,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    groups: Arc<G>,
    settings: Arc<S>,
    clock: Arc<C>,
}

impl<P, G, S, C> ProjectService<P, G, S, C>
where
    P: ProjectRepository,
    G: TaskGroupRepository,
    S: GroupSettings,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(projects: Arc<P>, groups: Arc<G>, settings: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            projects,
            groups,
            settings,
            clock,
        }
    }

    /// Returns every stored project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectRepository`] when the lookup
    /// fails.
    pub async fn read_all(&self) -> ProjectServiceResult<Vec<ProjectReadModel>> {
        let projects = self.projects.find_all().await?;
        Ok(projects.iter().map(ProjectReadModel::from).collect())
    }

    /// Validates and stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when the description or a
    /// step is invalid, or [`ProjectServiceError::ProjectRepository`] when
    /// persistence fails.
    pub async fn save(&self, request: CreateProjectRequest) -> ProjectServiceResult<ProjectReadModel> {
        let CreateProjectRequest {
            description,
            steps: step_specs,
        } = request;
        let steps = step_specs
            .into_iter()
            .map(|(step_description, days)| ProjectStep::new(step_description, days))
            .collect::<Result<Vec<_>, _>>()?;
        let project = Project::new(description, steps)?;

        let saved = self.projects.save(project).await?;
        tracing::info!(
            project_id = ?saved.id(),
            steps = saved.steps().len(),
            "stored project"
        );
        Ok(ProjectReadModel::from(&saved))
    }

    /// Instantiates a task group from a project's steps.
    ///
    /// Each step becomes a task due `now` plus the step's day offset. The
    /// group takes the project's description and the earliest task deadline.
    /// The group policy is checked before the project is looked up, and no
    /// write happens unless both checks pass.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::SingleUndoneGroupAllowed`] when the
    /// policy forbids another undone group,
    /// [`ProjectServiceError::ProjectNotFound`] when the project does not
    /// exist, [`ProjectServiceError::GroupDomain`] when a deadline cannot be
    /// represented, or a repository error when persistence fails.
    pub async fn create_group(
        &self,
        project_id: ProjectId,
        now: NaiveDateTime,
    ) -> ProjectServiceResult<GroupReadModel> {
        let policy = GroupCreationPolicy::from_flag(self.settings.allow_multiple_groups());
        if policy.requires_undone_check() {
            let undone_exists = self.groups.exists_undone_for_project(project_id).await?;
            if !policy.permits(undone_exists) {
                tracing::debug!(%project_id, "rejected group creation: undone group exists");
                return Err(ProjectServiceError::SingleUndoneGroupAllowed(project_id));
            }
        }

        let Some(project) = self.projects.find_by_id(project_id).await? else {
            tracing::debug!(%project_id, "rejected group creation: unknown project");
            return Err(ProjectServiceError::ProjectNotFound(project_id));
        };

        let group = group_from_project(&project, project_id, now, &*self.clock)?;
        let saved = self.groups.save(group).await?;
        tracing::info!(
            %project_id,
            group_id = ?saved.id(),
            tasks = saved.tasks().len(),
            "created task group from project"
        );
        Ok(GroupReadModel::from(&saved))
    }
}

/// Copies every step of `project` into a task due relative to `now`.
fn group_from_project(
    project: &Project,
    project_id: ProjectId,
    now: NaiveDateTime,
    clock: &impl Clock,
) -> Result<TaskGroup, TaskGroupDomainError> {
    let tasks = project
        .steps()
        .iter()
        .map(|step| {
            let deadline = deadline_from(now, step.days_to_deadline())?;
            Task::new(step.description(), deadline, clock)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TaskGroup::new(project.description(), tasks, clock)?.for_project(project_id))
}
