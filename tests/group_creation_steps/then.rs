//! Then steps for group creation BDD scenarios.

use super::world::GroupCreationWorld;
use chrono::NaiveDateTime;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use stepwise::{
    project::services::{ProjectServiceError, ProjectServiceResult},
    task_group::domain::GroupReadModel,
};

fn last_result(world: &GroupCreationWorld) -> Result<&ProjectServiceResult<GroupReadModel>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))
}

fn created_group(world: &GroupCreationWorld) -> Result<&GroupReadModel, eyre::Report> {
    last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected group creation failure: {err}"))
}

#[then(r#"the new group "{description}" is due on "{deadline}""#)]
fn group_due_on(
    world: &GroupCreationWorld,
    description: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    let group = created_group(world)?;
    let expected: NaiveDateTime = deadline.parse().wrap_err("parse expected deadline")?;

    if group.description != description {
        return Err(eyre::eyre!(
            "expected description {description}, found {}",
            group.description
        ));
    }
    if group.deadline != Some(expected) {
        return Err(eyre::eyre!(
            "expected deadline {expected}, found {:?}",
            group.deadline
        ));
    }
    if group.tasks.iter().any(|task| task.deadline != expected) {
        return Err(eyre::eyre!("task deadlines do not match the group deadline"));
    }
    Ok(())
}

#[then("the new group has {count:usize} undone tasks")]
fn group_has_undone_tasks(world: &GroupCreationWorld, count: usize) -> Result<(), eyre::Report> {
    let group = created_group(world)?;
    let undone = group.tasks.iter().filter(|task| !task.done).count();
    if undone != count {
        return Err(eyre::eyre!("expected {count} undone tasks, found {undone}"));
    }
    Ok(())
}

#[then("the store holds {count:usize} groups")]
fn store_holds_groups(world: &GroupCreationWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.groups.count().wrap_err("count stored groups")?;
    if stored != count {
        return Err(eyre::eyre!("expected {count} stored groups, found {stored}"));
    }
    Ok(())
}

#[then("group creation fails because an undone group exists")]
fn fails_on_undone_group(world: &GroupCreationWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(ProjectServiceError::SingleUndoneGroupAllowed(_))) {
        return Err(eyre::eyre!(
            "expected single undone group error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("group creation fails because the project does not exist")]
fn fails_on_unknown_project(world: &GroupCreationWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(ProjectServiceError::ProjectNotFound(_))) {
        return Err(eyre::eyre!("expected project not found error, got {result:?}"));
    }
    Ok(())
}
