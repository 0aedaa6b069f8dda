//! In-memory integration tests for completion toggles across services.

use super::helpers::{Stack, reference_date};
use chrono::TimeDelta;
use rstest::rstest;
use stepwise::{
    project::services::ProjectServiceError,
    task_group::{
        domain::{TaskEventKind, TaskGroupDomainError, TaskId, TaskUpdate},
        services::{CreateGroupRequest, TaskGroupServiceError},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_group_frees_the_single_group_slot() -> Result<(), eyre::Report> {
    let stack = Stack::from_toml("[template]\nallow_multiple_tasks = false\n")?;
    let project_id = stack.lorem_project().await?;
    let first = stack
        .projects
        .create_group(project_id, reference_date()?)
        .await?;
    let group_id = first
        .id
        .ok_or_else(|| eyre::eyre!("stored group has no id"))?;

    let event = stack
        .task_groups
        .toggle_task(group_id, TaskId::new(1))
        .await?;
    eyre::ensure!(event.kind() == TaskEventKind::Done, "task should be done");
    stack.task_groups.toggle_group(group_id).await?;

    let second = stack
        .projects
        .create_group(project_id, reference_date()?)
        .await?;
    eyre::ensure!(second.id != first.id, "expected a fresh group");
    eyre::ensure!(stack.group_count()? == 2, "expected two stored groups");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_group_blocks_new_instances_again() -> Result<(), eyre::Report> {
    let stack = Stack::from_toml("[template]\nallow_multiple_tasks = false\n")?;
    let project_id = stack.lorem_project().await?;
    let created = stack
        .projects
        .create_group(project_id, reference_date()?)
        .await?;
    let group_id = created
        .id
        .ok_or_else(|| eyre::eyre!("stored group has no id"))?;

    stack
        .task_groups
        .toggle_task(group_id, TaskId::new(1))
        .await?;
    stack.task_groups.toggle_group(group_id).await?;
    stack.task_groups.toggle_group(group_id).await?;

    let result = stack
        .projects
        .create_group(project_id, reference_date()?)
        .await;
    eyre::ensure!(
        matches!(result, Err(ProjectServiceError::SingleUndoneGroupAllowed(_))),
        "expected policy rejection, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn free_standing_groups_do_not_count_against_projects() -> Result<(), eyre::Report> {
    let stack = Stack::from_toml("")?;
    let project_id = stack.lorem_project().await?;

    stack
        .task_groups
        .create_group(CreateGroupRequest::new("errands").with_task("post", reference_date()?))
        .await?;
    stack
        .projects
        .create_group(project_id, reference_date()?)
        .await?;

    eyre::ensure!(stack.group_count()? == 2, "expected two stored groups");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn undone_tasks_keep_group_open() -> Result<(), eyre::Report> {
    let stack = Stack::from_toml("")?;
    let created = stack
        .task_groups
        .create_group(
            CreateGroupRequest::new("errands")
                .with_task("post", reference_date()?)
                .with_task("bank", reference_date()?),
        )
        .await?;
    let group_id = created
        .id
        .ok_or_else(|| eyre::eyre!("stored group has no id"))?;

    stack
        .task_groups
        .toggle_task(group_id, TaskId::new(1))
        .await?;
    let result = stack.task_groups.toggle_group(group_id).await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskGroupServiceError::Domain(
                TaskGroupDomainError::GroupHasUndoneTasks(_)
            ))
        ),
        "expected undone task rejection, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_task_deadline_leaves_group_deadline_alone() -> Result<(), eyre::Report> {
    let stack = Stack::from_toml("")?;
    let project_id = stack.lorem_project().await?;
    let created = stack
        .projects
        .create_group(project_id, reference_date()?)
        .await?;
    let group_id = created
        .id
        .ok_or_else(|| eyre::eyre!("stored group has no id"))?;
    let later = reference_date()? + TimeDelta::days(30);

    let edited = stack
        .task_groups
        .update_task(group_id, TaskId::new(1), TaskUpdate::new("rewrite", true, later))
        .await?;

    eyre::ensure!(edited.deadline == later, "task deadline should move");
    let groups = stack.task_groups.read_all().await?;
    let stored = groups
        .iter()
        .find(|group| group.id == Some(group_id))
        .ok_or_else(|| eyre::eyre!("group missing after update"))?;
    eyre::ensure!(
        stored.deadline == created.deadline,
        "group deadline should stay at {:?}, got {:?}",
        created.deadline,
        stored.deadline
    );
    eyre::ensure!(
        stored.tasks.first() == Some(&edited),
        "stored task should match the edit"
    );
    stack.task_groups.toggle_group(group_id).await?;
    Ok(())
}
