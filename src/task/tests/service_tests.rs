//! Service orchestration tests for project and task management.

use std::sync::{Arc, Mutex};

use crate::task::{
    adapters::{clock::FixedClock, memory::InMemoryTaskStore},
    domain::{
        DeadlinePolicy, Project, ProjectId, ProjectName, Task, TaskChange, TaskDescription,
        TaskId,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
    services::{ErrorKind, TaskService, TaskServiceError},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::{days_from_today, today};

type TestService = TaskService<InMemoryTaskStore, FixedClock>;

#[fixture]
fn service() -> TestService {
    let clock = FixedClock::on(today()).expect("local noon exists");
    TaskService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(clock))
}

fn task_id(value: u64) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

#[rstest]
fn service_reports_clock_date_as_today(service: TestService) {
    assert_eq!(service.today(), today());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn show_lists_secrets_tasks_unchecked_in_creation_order(service: TestService) {
    let project = service.add_project("secrets").await.expect("project");
    service
        .add_task(project.id(), "Eat more donuts.")
        .await
        .expect("first task");
    service
        .add_task(project.id(), "Destroy all humans.")
        .await
        .expect("second task");

    let projects = service.all_projects().await.expect("list projects");
    assert_eq!(projects.len(), 1);
    let secrets = projects.first().expect("secrets project");
    assert_eq!(secrets.name().as_str(), "secrets");

    let descriptions: Vec<&str> = secrets
        .tasks()
        .iter()
        .map(|task| task.description().as_str())
        .collect();
    assert_eq!(descriptions, vec!["Eat more donuts.", "Destroy all humans."]);
    assert!(secrets.tasks().iter().all(|task| !task.is_done()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_project_is_already_exists(service: TestService) {
    service.add_project("secrets").await.expect("project");

    let err = service
        .add_project("secrets")
        .await
        .expect_err("duplicate should fail");

    assert!(matches!(
        err,
        TaskServiceError::Store(TaskStoreError::DuplicateProjectName(_))
    ));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(err.to_string(), "Project 'secrets' already exists.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_inputs_are_validation_errors(service: TestService) {
    let blank_project = service.add_project("  ").await.expect_err("blank name");
    assert_eq!(blank_project.kind(), ErrorKind::Validation);

    let project = service.add_project("home").await.expect("project");
    let blank_task = service
        .add_task(project.id(), "")
        .await
        .expect_err("blank description");
    assert_eq!(blank_task.kind(), ErrorKind::Validation);
    assert!(service.list_all_tasks().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adding_task_to_missing_project_is_not_found(service: TestService) {
    let missing = ProjectId::new(5).expect("valid id");
    let err = service
        .add_task(missing, "orphan")
        .await
        .expect_err("project is missing");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn check_then_uncheck_round_trips(service: TestService) {
    let project = service.add_project("home").await.expect("project");
    let task = service.add_task(project.id(), "laundry").await.expect("task");

    service.check_task(task.id(), true).await.expect("check");
    assert!(service.get_task(task.id()).await.expect("read").is_done());

    service.check_task(task.id(), false).await.expect("uncheck");
    assert!(!service.get_task(task.id()).await.expect("read").is_done());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutating_missing_task_is_not_found(service: TestService) {
    let check = service
        .check_task(task_id(9), true)
        .await
        .expect_err("missing task");
    let deadline = service
        .set_deadline(task_id(9), today())
        .await
        .expect_err("missing task");

    assert_eq!(check.kind(), ErrorKind::NotFound);
    assert_eq!(deadline.kind(), ErrorKind::NotFound);
    assert_eq!(check.to_string(), "Task with ID 9 not found.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadline_is_stored_and_read_back(service: TestService) {
    let project = service.add_project("home").await.expect("project");
    let task = service.add_task(project.id(), "taxes").await.expect("task");
    let past = days_from_today(-30);

    let updated = service.set_deadline(task.id(), past).await.expect("deadline");
    assert_eq!(updated.deadline(), Some(past));
    assert_eq!(
        service.get_task(task.id()).await.expect("read").deadline(),
        Some(past)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reject_past_policy_refuses_yesterday_but_accepts_today(service: TestService) {
    let strict = service.with_deadline_policy(DeadlinePolicy::RejectPast);
    let project = strict.add_project("home").await.expect("project");
    let task = strict.add_task(project.id(), "taxes").await.expect("task");

    let err = strict
        .set_deadline(task.id(), days_from_today(-1))
        .await
        .expect_err("past deadline");
    assert!(matches!(err, TaskServiceError::DeadlineInPast { .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(strict.get_task(task.id()).await.expect("read").deadline().is_none());

    strict
        .set_deadline(task.id(), today())
        .await
        .expect("today is allowed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn today_returns_only_tasks_due_today(service: TestService) {
    let project = service.add_project("home").await.expect("project");
    let due = service.add_task(project.id(), "due").await.expect("task");
    let later = service.add_task(project.id(), "later").await.expect("task");
    service.add_task(project.id(), "someday").await.expect("task");

    service.set_deadline(due.id(), today()).await.expect("deadline");
    service
        .set_deadline(later.id(), days_from_today(1))
        .await
        .expect("deadline");

    let ids: Vec<TaskId> = service
        .tasks_for_today()
        .await
        .expect("today")
        .iter()
        .map(|task| task.id())
        .collect();
    assert_eq!(ids, vec![due.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn today_groups_due_tasks_under_their_projects(service: TestService) {
    let project1 = service.add_project("project1").await.expect("project");
    let project2 = service.add_project("project2").await.expect("project");
    let task1 = service.add_task(project1.id(), "task 1").await.expect("task");
    let task2 = service.add_task(project1.id(), "task 2").await.expect("task");
    let task3 = service.add_task(project2.id(), "task 3").await.expect("task");

    service.set_deadline(task1.id(), today()).await.expect("deadline");
    service
        .set_deadline(task2.id(), days_from_today(1))
        .await
        .expect("deadline");
    service.set_deadline(task3.id(), today()).await.expect("deadline");

    let layout: Vec<(String, Vec<u64>)> = service
        .today_by_project()
        .await
        .expect("today")
        .iter()
        .map(|group| {
            (
                group.project_name().to_string(),
                group.tasks().iter().map(|task| task.id().value()).collect(),
            )
        })
        .collect();

    assert_eq!(
        layout,
        vec![
            ("project1".to_owned(), vec![1]),
            ("project2".to_owned(), vec![3]),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_by_deadline_matches_exact_dates_and_missing_deadlines(service: TestService) {
    let project = service.add_project("home").await.expect("project");
    let dated = service.add_task(project.id(), "dated").await.expect("task");
    let undated = service.add_task(project.id(), "undated").await.expect("task");
    service
        .set_deadline(dated.id(), days_from_today(3))
        .await
        .expect("deadline");

    let on_date = service
        .tasks_by_deadline(Some(days_from_today(3)))
        .await
        .expect("query");
    let without = service.tasks_by_deadline(None).await.expect("query");
    let elsewhere = service
        .tasks_by_deadline(Some(today()))
        .await
        .expect("query");

    assert_eq!(on_date.iter().map(|t| t.id()).collect::<Vec<_>>(), vec![dated.id()]);
    assert_eq!(without.iter().map(|t| t.id()).collect::<Vec<_>>(), vec![undated.id()]);
    assert!(elsewhere.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lookup_within_project_checks_ownership(service: TestService) {
    let home = service.add_project("home").await.expect("project");
    let work = service.add_project("work").await.expect("project");
    let task = service.add_task(home.id(), "dishes").await.expect("task");

    let found = service
        .get_task_in_project(home.id(), task.id())
        .await
        .expect("owned task");
    assert_eq!(found, task);

    let err = service
        .get_task_in_project(work.id(), task.id())
        .await
        .expect_err("task belongs elsewhere");
    assert!(matches!(err, TaskServiceError::TaskNotInProject { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_lookup_by_name_is_exact(service: TestService) {
    let created = service.add_project("secrets").await.expect("project");

    let found = service
        .get_project_by_name("secrets")
        .await
        .expect("lookup by name");
    assert_eq!(found.id(), created.id());

    let err = service
        .get_project_by_name("Secrets")
        .await
        .expect_err("case differs");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn view_by_deadline_puts_undated_last(service: TestService) {
    let project = service.add_project("home").await.expect("project");
    let undated = service.add_task(project.id(), "undated").await.expect("task");
    let later = service.add_task(project.id(), "later").await.expect("task");
    let soon = service.add_task(project.id(), "soon").await.expect("task");
    service
        .set_deadline(later.id(), days_from_today(7))
        .await
        .expect("deadline");
    service.set_deadline(soon.id(), today()).await.expect("deadline");

    let groups = service.view_by_deadline().await.expect("view");
    let deadlines: Vec<_> = groups.iter().map(|group| group.deadline()).collect();
    assert_eq!(deadlines, vec![Some(today()), Some(days_from_today(7)), None]);

    let last = groups.last().expect("undated group");
    let undated_ids: Vec<TaskId> = last
        .projects()
        .iter()
        .flat_map(|group| group.tasks().iter().map(|task| task.id()))
        .collect();
    assert_eq!(undated_ids, vec![undated.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_can_be_created_with_a_deadline(service: TestService) {
    let project = service.add_project("home").await.expect("project");

    let dated = service
        .add_task_with_deadline(project.id(), "taxes", Some(days_from_today(2)))
        .await
        .expect("dated task");
    let undated = service
        .add_task_with_deadline(project.id(), "someday", None)
        .await
        .expect("undated task");

    assert_eq!(dated.deadline(), Some(days_from_today(2)));
    assert!(undated.deadline().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_deadline_creates_no_task(service: TestService) {
    let strict = service.with_deadline_policy(DeadlinePolicy::RejectPast);
    let project = strict.add_project("home").await.expect("project");

    let err = strict
        .add_task_with_deadline(project.id(), "late", Some(days_from_today(-2)))
        .await
        .expect_err("past deadline");

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(strict.list_all_tasks().await.expect("list").is_empty());
}

/// Store that records every task it sees at the start of an update.
#[derive(Default)]
struct UpdateRecordingStore {
    inner: InMemoryTaskStore,
    seen_before_update: Mutex<Vec<Option<Task>>>,
}

#[async_trait]
impl TaskStore for UpdateRecordingStore {
    async fn create_project(&self, name: ProjectName) -> TaskStoreResult<Project> {
        self.inner.create_project(name).await
    }

    async fn create_task(
        &self,
        project_id: ProjectId,
        description: TaskDescription,
        deadline: Option<NaiveDate>,
    ) -> TaskStoreResult<Task> {
        self.inner.create_task(project_id, description, deadline).await
    }

    async fn update_task(&self, task_id: TaskId, change: TaskChange) -> TaskStoreResult<Task> {
        let before = self.inner.find_task(task_id).await?;
        self.seen_before_update
            .lock()
            .expect("recording lock")
            .push(before);
        self.inner.update_task(task_id, change).await
    }

    async fn find_project(&self, id: ProjectId) -> TaskStoreResult<Option<Project>> {
        self.inner.find_project(id).await
    }

    async fn find_project_by_name(&self, name: &ProjectName) -> TaskStoreResult<Option<Project>> {
        self.inner.find_project_by_name(name).await
    }

    async fn find_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.inner.find_task(id).await
    }

    async fn list_projects(&self) -> TaskStoreResult<Vec<Project>> {
        self.inner.list_projects().await
    }

    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.inner.list_tasks().await
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn dated_task_is_never_visible_without_its_deadline() {
    let store = Arc::new(UpdateRecordingStore::default());
    let clock = FixedClock::on(today()).expect("local noon exists");
    let service = TaskService::new(Arc::clone(&store), Arc::new(clock));
    let project = service.add_project("home").await.expect("project");

    let task = service
        .add_task_with_deadline(project.id(), "taxes", Some(days_from_today(1)))
        .await
        .expect("dated task");

    assert!(
        store
            .seen_before_update
            .lock()
            .expect("recording lock")
            .is_empty(),
        "creation must not go through a separate deadline update"
    );
    let stored = service.get_task(task.id()).await.expect("lookup");
    assert_eq!(stored.deadline(), Some(days_from_today(1)));
}
