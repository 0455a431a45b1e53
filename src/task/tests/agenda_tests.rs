//! Unit tests for deadline and project grouping.

use crate::task::domain::{
    Project, ProjectId, ProjectName, TaskChange, TaskDescription, TaskId, group_by_deadline,
    group_by_project,
};
use chrono::NaiveDate;
use rstest::rstest;

use super::{days_from_today, today};

/// Builds a project whose tasks carry the given ids and deadlines.
fn project_with(
    id: u64,
    name: &str,
    tasks: &[(u64, Option<NaiveDate>)],
) -> eyre::Result<Project> {
    let mut project = Project::new(ProjectId::new(id)?, ProjectName::new(name)?);
    for &(task_id, deadline) in tasks {
        let task_id = TaskId::new(task_id)?;
        project.open_task(task_id, TaskDescription::new(format!("task {task_id}"))?);
        if let (Some(date), Some(task)) = (deadline, project.task_mut(task_id)) {
            task.apply(TaskChange::Deadline(date));
        }
    }
    Ok(project)
}

#[rstest]
fn undated_group_sorts_last_regardless_of_insertion_order() -> eyre::Result<()> {
    let project = project_with(
        1,
        "project",
        &[
            (1, None),
            (2, Some(days_from_today(7))),
            (3, Some(days_from_today(1))),
            (4, Some(today())),
        ],
    )?;

    let deadlines: Vec<Option<NaiveDate>> = group_by_deadline([&project])
        .iter()
        .map(|group| group.deadline())
        .collect();

    eyre::ensure!(
        deadlines
            == vec![
                Some(today()),
                Some(days_from_today(1)),
                Some(days_from_today(7)),
                None
            ]
    );
    Ok(())
}

#[rstest]
fn project_groups_sort_by_name_and_tasks_by_id() -> eyre::Result<()> {
    let zeta = project_with(1, "zeta", &[(1, Some(today())), (4, Some(today()))])?;
    let alpha = project_with(2, "alpha", &[(3, Some(today())), (2, Some(today()))])?;

    let groups = group_by_deadline([&zeta, &alpha]);
    eyre::ensure!(groups.len() == 1);
    let group = groups
        .first()
        .ok_or_else(|| eyre::eyre!("missing deadline group"))?;

    let layout: Vec<(String, Vec<u64>)> = group
        .projects()
        .iter()
        .map(|project| {
            (
                project.project_name().to_string(),
                project.tasks().iter().map(|task| task.id().value()).collect(),
            )
        })
        .collect();

    eyre::ensure!(
        layout
            == vec![
                ("alpha".to_owned(), vec![2, 3]),
                ("zeta".to_owned(), vec![1, 4]),
            ]
    );
    Ok(())
}

#[rstest]
fn projects_without_tasks_produce_no_groups() -> eyre::Result<()> {
    let empty = project_with(1, "empty", &[])?;
    eyre::ensure!(group_by_deadline([&empty]).is_empty());
    Ok(())
}

#[rstest]
fn only_undated_tasks_form_a_single_trailing_group() -> eyre::Result<()> {
    let project = project_with(1, "inbox", &[(1, None), (2, None)])?;
    let groups = group_by_deadline([&project]);

    eyre::ensure!(groups.len() == 1);
    eyre::ensure!(groups.iter().all(|group| group.deadline().is_none()));
    Ok(())
}

#[rstest]
fn group_by_project_orders_names_then_ids() -> eyre::Result<()> {
    let second = project_with(2, "project2", &[(3, Some(today()))])?;
    let first = project_with(1, "project1", &[(1, Some(today()))])?;
    let tasks = second
        .tasks()
        .iter()
        .chain(first.tasks())
        .cloned()
        .collect::<Vec<_>>();

    let names: Vec<String> = group_by_project(tasks)
        .iter()
        .map(|group| group.project_name().to_string())
        .collect();

    eyre::ensure!(names == vec!["project1".to_owned(), "project2".to_owned()]);
    Ok(())
}
