//! In-memory repository for task group tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::{
    project::domain::ProjectId,
    task_group::{
        domain::{Task, TaskGroup, TaskGroupId, TaskId},
        ports::{TaskGroupRepository, TaskGroupRepositoryError, TaskGroupRepositoryResult},
    },
};

/// Thread-safe in-memory task group repository.
///
/// Group and task identifiers are assigned from independent counters
/// starting at 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGroupRepository {
    state: Arc<RwLock<InMemoryGroupState>>,
}

#[derive(Debug, Default)]
struct InMemoryGroupState {
    groups: BTreeMap<TaskGroupId, TaskGroup>,
    last_group_id: i32,
    last_task_id: i32,
}

impl InMemoryTaskGroupRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored groups.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGroupRepositoryError::Persistence`] when the internal
    /// lock is poisoned.
    pub fn count(&self) -> TaskGroupRepositoryResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.groups.len())
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskGroupRepositoryError {
    TaskGroupRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskGroupRepository for InMemoryTaskGroupRepository {
    async fn exists_undone_for_project(
        &self,
        project_id: ProjectId,
    ) -> TaskGroupRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .groups
            .values()
            .filter(|group| !group.is_done())
            .any(|group| group.project_id() == Some(project_id)))
    }

    async fn find_by_id(&self, id: TaskGroupId) -> TaskGroupRepositoryResult<Option<TaskGroup>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.groups.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskGroupRepositoryResult<Vec<TaskGroup>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.groups.values().cloned().collect())
    }

    async fn save(&self, group: TaskGroup) -> TaskGroupRepositoryResult<TaskGroup> {
        let mut state = self.state.write().map_err(poisoned)?;

        let stored_task_ids: Vec<TaskId> = match group.id() {
            Some(existing) => state
                .groups
                .get(&existing)
                .ok_or(TaskGroupRepositoryError::NotFound(existing))?
                .tasks()
                .iter()
                .filter_map(Task::id)
                .collect(),
            None => Vec::new(),
        };
        if let Some(foreign) = group
            .tasks()
            .iter()
            .filter_map(Task::id)
            .find(|task_id| !stored_task_ids.contains(task_id))
        {
            return Err(TaskGroupRepositoryError::ForeignTask(foreign));
        }

        let id = match group.id() {
            Some(existing) => existing,
            None => {
                state.last_group_id += 1;
                TaskGroupId::new(state.last_group_id)
            }
        };

        let mut last_task_id = state.last_task_id;
        let saved = group.assign_identity(id, || {
            last_task_id += 1;
            TaskId::new(last_task_id)
        });
        state.last_task_id = last_task_id;
        state.groups.insert(id, saved.clone());
        Ok(saved)
    }
}
