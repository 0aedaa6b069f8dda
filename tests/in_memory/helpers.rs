//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use mockable::DefaultClock;
use stepwise::{
    config::TaskConfiguration,
    project::{
        adapters::memory::InMemoryProjectRepository,
        domain::ProjectId,
        services::{CreateProjectRequest, ProjectService},
    },
    task_group::{adapters::memory::InMemoryTaskGroupRepository, services::TaskGroupService},
};

/// Project service wired to in-memory adapters.
pub type TestProjectService = ProjectService<
    InMemoryProjectRepository,
    InMemoryTaskGroupRepository,
    TaskConfiguration,
    DefaultClock,
>;

/// Task group service wired to in-memory adapters.
pub type TestGroupService = TaskGroupService<InMemoryTaskGroupRepository, DefaultClock>;

/// Both services sharing one set of in-memory stores.
pub struct Stack {
    /// Group store shared by both services.
    pub groups: Arc<InMemoryTaskGroupRepository>,
    /// Project service under test.
    pub projects: TestProjectService,
    /// Task group service under test.
    pub task_groups: TestGroupService,
}

impl Stack {
    /// Builds a stack whose group policy comes from `configuration`.
    pub fn with_configuration(configuration: TaskConfiguration) -> Self {
        let groups = Arc::new(InMemoryTaskGroupRepository::new());
        let projects = ProjectService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::clone(&groups),
            Arc::new(configuration),
            Arc::new(DefaultClock),
        );
        let task_groups = TaskGroupService::new(Arc::clone(&groups), Arc::new(DefaultClock));
        Self {
            groups,
            projects,
            task_groups,
        }
    }

    /// Builds a stack from a TOML configuration snippet.
    ///
    /// # Errors
    ///
    /// Returns an error when the snippet does not parse.
    pub fn from_toml(contents: &str) -> Result<Self, eyre::Report> {
        let configuration = TaskConfiguration::from_toml_str(contents)?;
        Ok(Self::with_configuration(configuration))
    }

    /// Stores the "lorem" project with a single step due one day early.
    ///
    /// # Errors
    ///
    /// Returns an error when the project cannot be stored.
    pub async fn lorem_project(&self) -> Result<ProjectId, eyre::Report> {
        let stored = self
            .projects
            .save(CreateProjectRequest::new("lorem").with_step("test", -1))
            .await?;
        stored
            .id
            .ok_or_else(|| eyre::eyre!("stored project has no id"))
    }

    /// Returns the number of stored groups.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    pub fn group_count(&self) -> Result<usize, eyre::Report> {
        Ok(self.groups.count()?)
    }
}

/// Reference date used across scenarios.
///
/// # Errors
///
/// Returns an error for an invalid calendar date.
pub fn reference_date() -> Result<NaiveDateTime, eyre::Report> {
    NaiveDate::from_ymd_opt(2024, 1, 10)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| eyre::eyre!("invalid reference date"))
}
