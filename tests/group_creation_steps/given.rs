//! Given steps for group creation BDD scenarios.

use super::world::{GroupCreationWorld, run_async};
use chrono::NaiveDateTime;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use stepwise::{
    project::services::CreateProjectRequest, task_group::ports::TaskGroupRepository,
};

const SEED_DATE: &str = "2024-01-01T00:00:00";

#[given(r#"a project "{description}" with a step "{step}" due {days:i32} days"#)]
fn project_with_step(
    world: &mut GroupCreationWorld,
    description: String,
    step: String,
    days: i32,
) -> Result<(), eyre::Report> {
    let request = CreateProjectRequest::new(description).with_step(step, days);
    let stored = run_async(world.project_service().save(request)).wrap_err("store project")?;
    world.project_id = stored.id;
    Ok(())
}

#[given("several undone groups are allowed per project")]
fn multiple_groups_allowed(world: &mut GroupCreationWorld) {
    world.configuration.template.allow_multiple_tasks = true;
}

#[given("only one undone group is allowed per project")]
fn single_group_allowed(world: &mut GroupCreationWorld) {
    world.configuration.template.allow_multiple_tasks = false;
}

#[given("a group has already been created for that project")]
fn group_already_created(world: &mut GroupCreationWorld) -> Result<(), eyre::Report> {
    let project_id = world
        .project_id
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let now: NaiveDateTime = SEED_DATE.parse().wrap_err("parse seed date")?;
    let created = run_async(world.project_service().create_group(project_id, now))
        .wrap_err("create initial group")?;
    world.existing_group = Some(created);
    Ok(())
}

#[given("every task of that group has been completed")]
fn group_completed(world: &mut GroupCreationWorld) -> Result<(), eyre::Report> {
    let group_id = world
        .existing_group
        .as_ref()
        .and_then(|group| group.id)
        .ok_or_else(|| eyre::eyre!("missing existing group in scenario world"))?;
    let group = run_async(world.groups.find_by_id(group_id))
        .wrap_err("load existing group")?
        .ok_or_else(|| eyre::eyre!("existing group {group_id} is not stored"))?;

    let service = world.group_service();
    for task_id in group.tasks().iter().filter_map(|task| task.id()) {
        run_async(service.toggle_task(group_id, task_id)).wrap_err("complete task")?;
    }
    run_async(service.toggle_group(group_id)).wrap_err("complete group")?;
    Ok(())
}
