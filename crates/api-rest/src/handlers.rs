//! Request handlers.
//!
//! Each handler makes exactly one `TaskService` call and serialises the result. Failures are
//! logged and turned into a JSON `{message}` body; nothing propagates past the handler.

use api_shared::{wire, HealthService};
use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
};
use taskboard_core::{Task, TaskDraft, TaskError};

use crate::AppState;

pub(crate) type ApiError = (StatusCode, Json<wire::ErrorRes>);

fn to_wire(task: Task) -> wire::Task {
    wire::Task {
        id: task.id.to_string(),
        title: task.title,
        description: task.description,
    }
}

fn to_draft(req: wire::TaskReq) -> TaskDraft {
    TaskDraft {
        title: req.title,
        description: req.description,
    }
}

/// Maps a service failure to a response. Only `NotFound` is distinguished.
fn api_error(context: &str, e: TaskError) -> ApiError {
    match e {
        TaskError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(wire::ErrorRes {
                message: "task not found".into(),
            }),
        ),
        other => {
            tracing::error!("{} error: {:?}", context, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(wire::ErrorRes {
                    message: other.to_string(),
                }),
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = wire::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub(crate) async fn health(State(_state): State<AppState>) -> Json<wire::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/tasks",
    request_body = wire::TaskReq,
    responses(
        (status = 201, description = "Task created", body = wire::Task),
        (status = 500, description = "Internal server error", body = wire::ErrorRes)
    )
)]
/// Create a new task
///
/// Stores the title and description as given; neither is required. The response carries the
/// identifier assigned by the store.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store call fails.
#[axum::debug_handler]
pub(crate) async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<wire::TaskReq>,
) -> Result<(StatusCode, Json<wire::Task>), ApiError> {
    match state.task_service.create(to_draft(req)).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(to_wire(task)))),
        Err(e) => Err(api_error("Create task", e)),
    }
}

#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All tasks", body = [wire::Task]),
        (status = 500, description = "Internal server error", body = wire::ErrorRes)
    )
)]
/// List all tasks
///
/// Returns every task in store order. An empty store gives `[]`.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store call fails.
#[axum::debug_handler]
pub(crate) async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<wire::Task>>, ApiError> {
    match state.task_service.list().await {
        Ok(tasks) => Ok(Json(tasks.into_iter().map(to_wire).collect())),
        Err(e) => Err(api_error("List tasks", e)),
    }
}

#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    request_body = wire::TaskReq,
    responses(
        (status = 200, description = "Task updated", body = wire::Task),
        (status = 404, description = "No task with this identifier", body = wire::ErrorRes),
        (status = 500, description = "Internal server error", body = wire::ErrorRes)
    )
)]
/// Replace a task's title and description
///
/// # Errors
/// Returns `404 Not Found` if the identifier names no task, `500` if the store call fails.
#[axum::debug_handler]
pub(crate) async fn update_task(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<wire::TaskReq>,
) -> Result<Json<wire::Task>, ApiError> {
    match state.task_service.update_by_str(&id, to_draft(req)).await {
        Ok(task) => Ok(Json(to_wire(task))),
        Err(e) => Err(api_error("Update task", e)),
    }
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 204, description = "Task removed, or was already absent"),
        (status = 500, description = "Internal server error", body = wire::ErrorRes)
    )
)]
/// Delete a task
///
/// Succeeds whether or not the task exists.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store call fails.
#[axum::debug_handler]
pub(crate) async fn delete_task(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<StatusCode, ApiError> {
    match state.task_service.delete_by_str(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(api_error("Delete task", e)),
    }
}
