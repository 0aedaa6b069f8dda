//! In-memory repository for project tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Project, ProjectId, ProjectStep, ProjectStepId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// Identifiers are assigned from per-repository counters starting at 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: BTreeMap<ProjectId, Project>,
    last_project_id: i32,
    last_step_id: i32,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn save(&self, project: Project) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(poisoned)?;

        let stored_step_ids: Vec<ProjectStepId> = match project.id() {
            Some(existing) => state
                .projects
                .get(&existing)
                .ok_or(ProjectRepositoryError::NotFound(existing))?
                .steps()
                .iter()
                .filter_map(ProjectStep::id)
                .collect(),
            None => Vec::new(),
        };
        if let Some(foreign) = project
            .steps()
            .iter()
            .filter_map(ProjectStep::id)
            .find(|step_id| !stored_step_ids.contains(step_id))
        {
            return Err(ProjectRepositoryError::ForeignStep(foreign));
        }

        let id = match project.id() {
            Some(existing) => existing,
            None => {
                state.last_project_id += 1;
                ProjectId::new(state.last_project_id)
            }
        };

        let mut last_step_id = state.last_step_id;
        let saved = project.assign_identity(id, || {
            last_step_id += 1;
            ProjectStepId::new(last_step_id)
        });
        state.last_step_id = last_step_id;
        state.projects.insert(id, saved.clone());
        Ok(saved)
    }
}
