//! Task group repository tests against a live `PostgreSQL` database.

use super::helpers::{BoxError, TemporaryDatabase, database};
use chrono::{NaiveDate, NaiveDateTime};
use mockable::DefaultClock;
use rstest::rstest;
use stepwise::{
    project::{
        adapters::postgres::PostgresProjectRepository,
        domain::{Project, ProjectStep},
        ports::ProjectRepository,
    },
    task_group::{
        adapters::postgres::PostgresTaskGroupRepository,
        domain::{PersistedTaskGroupData, Task, TaskGroup, TaskGroupId, TaskId},
        ports::{TaskGroupRepository, TaskGroupRepositoryError},
    },
};

fn day(day: u32) -> Result<NaiveDateTime, BoxError> {
    NaiveDate::from_ymd_opt(2024, 4, day)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .ok_or_else(|| "invalid calendar date".into())
}

fn group(description: &str, tasks: &[(&str, u32)]) -> Result<TaskGroup, BoxError> {
    let built = tasks
        .iter()
        .map(|(task_description, due)| -> Result<Task, BoxError> {
            Ok(Task::new(*task_description, day(*due)?, &DefaultClock)?)
        })
        .collect::<Result<Vec<_>, BoxError>>()?;
    Ok(TaskGroup::new(description, built, &DefaultClock)?)
}

fn with_tasks(target: &TaskGroup, tasks: Vec<Task>) -> Result<TaskGroup, BoxError> {
    Ok(TaskGroup::from_persisted(PersistedTaskGroupData {
        id: target.id().ok_or("stored group has no id")?,
        description: target.description().to_owned(),
        deadline: target.deadline(),
        done: target.is_done(),
        project_id: target.project_id(),
        tasks,
        created_at: target.created_at(),
        updated_at: target.updated_at(),
    }))
}

fn task_ids(group: &TaskGroup) -> Vec<Option<TaskId>> {
    group.tasks().iter().map(Task::id).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_group_reloads_with_toggled_task(
    database: Result<Option<TemporaryDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repository = PostgresTaskGroupRepository::new(db.pool());

    let mut saved = repository
        .save(group("sprint", &[("plan", 3), ("build", 5)])?)
        .await?;
    let group_id = saved.id().ok_or("stored group has no id")?;
    let first_task = saved
        .tasks()
        .first()
        .and_then(Task::id)
        .ok_or("stored task has no id")?;
    saved.toggle_task(first_task, &DefaultClock)?;
    repository.save(saved.clone()).await?;

    let reloaded = repository
        .find_by_id(group_id)
        .await?
        .ok_or("group missing after save")?;
    assert_eq!(reloaded.description(), "sprint");
    assert_eq!(reloaded.deadline(), Some(day(3)?));
    assert_eq!(task_ids(&reloaded), task_ids(&saved));
    let done: Vec<bool> = reloaded.tasks().iter().map(Task::is_done).collect();
    assert_eq!(done, vec![true, false]);
    assert!(
        reloaded
            .tasks()
            .iter()
            .all(|task| task.group_id() == Some(group_id))
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resaving_without_a_task_deletes_its_row(
    database: Result<Option<TemporaryDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repository = PostgresTaskGroupRepository::new(db.pool());
    let saved = repository
        .save(group("sprint", &[("plan", 3), ("build", 5)])?)
        .await?;
    let kept: Vec<Task> = saved.tasks().iter().take(1).cloned().collect();

    let trimmed = repository.save(with_tasks(&saved, kept)?).await?;

    assert_eq!(trimmed.tasks().len(), 1);
    assert_eq!(
        task_ids(&trimmed),
        task_ids(&saved).into_iter().take(1).collect::<Vec<_>>()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_of_another_group_is_rejected_and_rolled_back(
    database: Result<Option<TemporaryDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repository = PostgresTaskGroupRepository::new(db.pool());
    let first = repository.save(group("first", &[("plan", 3)])?).await?;
    let second = repository.save(group("second", &[("ship", 9)])?).await?;
    let renamed = TaskGroup::from_persisted(PersistedTaskGroupData {
        id: second.id().ok_or("stored group has no id")?,
        description: "renamed".to_owned(),
        deadline: second.deadline(),
        done: second.is_done(),
        project_id: None,
        tasks: first.tasks().to_vec(),
        created_at: second.created_at(),
        updated_at: second.updated_at(),
    });

    let result = repository.save(renamed).await;

    let stolen = first.tasks().first().and_then(Task::id);
    assert!(matches!(
        result,
        Err(TaskGroupRepositoryError::ForeignTask(id)) if Some(id) == stolen
    ));
    let reloaded_second = repository
        .find_by_id(second.id().ok_or("stored group has no id")?)
        .await?
        .ok_or("second group missing")?;
    assert_eq!(reloaded_second.description(), "second");
    assert_eq!(task_ids(&reloaded_second), task_ids(&second));
    let reloaded_first = repository
        .find_by_id(first.id().ok_or("stored group has no id")?)
        .await?
        .ok_or("first group missing")?;
    assert_eq!(task_ids(&reloaded_first), task_ids(&first));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saving_unknown_group_is_not_found(
    database: Result<Option<TemporaryDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repository = PostgresTaskGroupRepository::new(db.pool());
    let draft = group("ghost", &[])?;
    let ghost = TaskGroup::from_persisted(PersistedTaskGroupData {
        id: TaskGroupId::new(404),
        description: draft.description().to_owned(),
        deadline: None,
        done: false,
        project_id: None,
        tasks: Vec::new(),
        created_at: draft.created_at(),
        updated_at: draft.updated_at(),
    });

    let result = repository.save(ghost).await;

    assert!(matches!(
        result,
        Err(TaskGroupRepositoryError::NotFound(id)) if id == TaskGroupId::new(404)
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn undone_lookup_follows_group_completion(
    database: Result<Option<TemporaryDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let projects = PostgresProjectRepository::new(db.pool());
    let repository = PostgresTaskGroupRepository::new(db.pool());
    let project = projects
        .save(Project::new("lorem", [ProjectStep::new("test", -1)?])?)
        .await?;
    let project_id = project.id().ok_or("stored project has no id")?;

    assert!(!repository.exists_undone_for_project(project_id).await?);
    let mut saved = repository
        .save(group("lorem", &[("test", 9)])?.for_project(project_id))
        .await?;
    assert!(repository.exists_undone_for_project(project_id).await?);

    let task_id = saved
        .tasks()
        .first()
        .and_then(Task::id)
        .ok_or("stored task has no id")?;
    saved.toggle_task(task_id, &DefaultClock)?;
    saved.toggle(&DefaultClock)?;
    repository.save(saved).await?;

    assert!(!repository.exists_undone_for_project(project_id).await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn long_descriptions_are_stored_in_full(
    database: Result<Option<TemporaryDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repository = PostgresTaskGroupRepository::new(db.pool());
    let long = "describe ".repeat(40).trim_end().to_owned();

    let saved = repository
        .save(group(&long, &[(long.as_str(), 2)])?)
        .await?;

    assert!(long.len() > 255);
    assert_eq!(saved.description(), long);
    let task = saved.tasks().first().ok_or("stored group has no task")?;
    assert_eq!(task.description(), long);
    Ok(())
}
