//! Route table and request handlers.

use super::dto::{
    CheckQuery, CreateProjectRequest, CreateTaskRequest, DeadlineGroupDto, DeadlineQuery,
    ProjectDto, TaskDto, TasksQuery, parse_deadline,
};
use super::error::{ApiError, ApiResult, status_for};
use crate::task::{
    domain::{CommandResult, ProjectId, TaskId},
    ports::TaskStore,
    services::{CommandDispatcher, TaskService},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use mockable::Clock;
use serde_json::Value;

/// Shared state handed to every handler.
pub struct ApiState<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    dispatcher: CommandDispatcher<S, C>,
}

impl<S, C> Clone for ApiState<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<S, C> ApiState<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    const fn service(&self) -> &TaskService<S, C> {
        self.dispatcher.service()
    }
}

/// Builds the HTTP router over a dispatcher.
#[must_use]
pub fn router<S, C>(dispatcher: CommandDispatcher<S, C>) -> Router
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/projects",
            get(list_projects::<S, C>).post(create_project::<S, C>),
        )
        .route("/api/projects/{id}", get(get_project::<S, C>))
        .route("/api/projects/{id}/tasks", post(create_task::<S, C>))
        .route("/api/projects/{id}/tasks/{task_id}", get(get_task::<S, C>))
        .route(
            "/api/projects/{id}/tasks/{task_id}/check",
            put(check_task::<S, C>),
        )
        .route(
            "/api/projects/{id}/tasks/{task_id}/deadline",
            put(set_deadline::<S, C>),
        )
        .route("/api/tasks", get(tasks_by_deadline::<S, C>))
        .route("/api/tasks/today", get(tasks_for_today::<S, C>))
        .route("/api/tasks/by-deadline", get(view_by_deadline::<S, C>))
        .route("/api/commands", post(dispatch_command::<S, C>))
        .with_state(ApiState { dispatcher })
}

fn task_ids(project: u64, task: u64) -> ApiResult<(ProjectId, TaskId)> {
    Ok((ProjectId::new(project)?, TaskId::new(task)?))
}

fn deadline_from(text: &str) -> ApiResult<chrono::NaiveDate> {
    parse_deadline(text).map_err(ApiError::bad_request)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_projects<S, C>(
    State(state): State<ApiState<S, C>>,
) -> ApiResult<Json<Vec<ProjectDto>>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let projects = state.service().all_projects().await?;
    Ok(Json(projects.iter().map(ProjectDto::from).collect()))
}

async fn create_project<S, C>(
    State(state): State<ApiState<S, C>>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let project = state.service().add_project(&request.name).await?;
    Ok((StatusCode::CREATED, Json(ProjectDto::from(&project))))
}

async fn get_project<S, C>(
    State(state): State<ApiState<S, C>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<ProjectDto>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let project = state.service().get_project(ProjectId::new(id)?).await?;
    Ok(Json(ProjectDto::from(&project)))
}

async fn create_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Path(id): Path<u64>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskDto>)>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let project_id = ProjectId::new(id)?;
    let deadline = request.deadline.as_deref().map(deadline_from).transpose()?;
    let task = state
        .service()
        .add_task_with_deadline(project_id, &request.description, deadline)
        .await?;
    Ok((StatusCode::CREATED, Json(TaskDto::from(&task))))
}

async fn get_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Path((id, task_id)): Path<(u64, u64)>,
) -> ApiResult<Json<TaskDto>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let (project_id, task_id) = task_ids(id, task_id)?;
    let task = state
        .service()
        .get_task_in_project(project_id, task_id)
        .await?;
    Ok(Json(TaskDto::from(&task)))
}

async fn check_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Path((id, task_id)): Path<(u64, u64)>,
    Query(query): Query<CheckQuery>,
) -> ApiResult<Json<TaskDto>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let (project_id, task_id) = task_ids(id, task_id)?;
    let service = state.service();
    service.get_task_in_project(project_id, task_id).await?;
    let task = service.check_task(task_id, query.checked).await?;
    Ok(Json(TaskDto::from(&task)))
}

async fn set_deadline<S, C>(
    State(state): State<ApiState<S, C>>,
    Path((id, task_id)): Path<(u64, u64)>,
    Query(query): Query<DeadlineQuery>,
) -> ApiResult<Json<TaskDto>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let (project_id, task_id) = task_ids(id, task_id)?;
    let deadline = deadline_from(&query.deadline)?;
    let service = state.service();
    service.get_task_in_project(project_id, task_id).await?;
    let task = service.set_deadline(task_id, deadline).await?;
    Ok(Json(TaskDto::from(&task)))
}

async fn tasks_by_deadline<S, C>(
    State(state): State<ApiState<S, C>>,
    Query(query): Query<TasksQuery>,
) -> ApiResult<Json<Vec<TaskDto>>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let deadline = query.deadline.as_deref().map(deadline_from).transpose()?;
    let tasks = state.service().tasks_by_deadline(deadline).await?;
    Ok(Json(tasks.iter().map(TaskDto::from).collect()))
}

async fn tasks_for_today<S, C>(
    State(state): State<ApiState<S, C>>,
) -> ApiResult<Json<Vec<TaskDto>>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let tasks = state.service().tasks_for_today().await?;
    Ok(Json(tasks.iter().map(TaskDto::from).collect()))
}

async fn view_by_deadline<S, C>(
    State(state): State<ApiState<S, C>>,
) -> ApiResult<Json<Vec<DeadlineGroupDto>>>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let groups = state.service().view_by_deadline().await?;
    Ok(Json(groups.iter().map(DeadlineGroupDto::from).collect()))
}

async fn dispatch_command<S, C>(
    State(state): State<ApiState<S, C>>,
    Json(command): Json<Value>,
) -> (StatusCode, Json<CommandResult>)
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let result = state.dispatcher.dispatch_value(command).await;
    let status = match (result.error_kind(), result.data()) {
        (Some(kind), _) => status_for(kind),
        (None, Some(_)) => StatusCode::CREATED,
        (None, None) => StatusCode::OK,
    };
    (status, Json(result))
}
