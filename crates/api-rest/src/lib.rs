//! # API REST
//!
//! REST API implementation for taskboard.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request tracing)
//!
//! Uses `api-shared` for wire types and `taskboard-core` for the task operations.

#![warn(rust_2018_idioms)]

mod handlers;

use api_shared::wire;
use axum::{
    routing::{get, put},
    Router,
};
use std::path::PathBuf;
use taskboard_core::{
    config::store_kind_from_env_value, CoreConfig, TaskService, DEFAULT_REST_ADDR,
    DEFAULT_TASK_DATA_DIR,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
///
/// Holds the task service, and through it the store handle opened at startup.
#[derive(Clone)]
pub struct AppState {
    pub task_service: TaskService,
}

impl AppState {
    pub fn new(task_service: TaskService) -> Self {
        Self { task_service }
    }
}

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::create_task,
        handlers::list_tasks,
        handlers::update_task,
        handlers::delete_task,
    ),
    components(schemas(wire::HealthRes, wire::Task, wire::TaskReq, wire::ErrorRes))
)]
pub struct ApiDoc;

/// Settings the server binaries read from the environment at startup.
#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub addr: String,
    pub core: CoreConfig,
}

/// Resolve server settings from the process environment.
///
/// # Environment Variables
/// - `TASKBOARD_REST_ADDR`: listen address (default: "0.0.0.0:8000")
/// - `TASK_DATA_DIR`: root directory of the file store (default: "task_data")
/// - `TASKBOARD_STORE`: `file` or `memory` (default: `file`)
///
/// # Errors
/// Returns an error if `TASKBOARD_STORE` names an unknown store or the resulting configuration
/// is invalid.
pub fn settings_from_env() -> anyhow::Result<ServerSettings> {
    let addr = std::env::var("TASKBOARD_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let task_data_dir =
        std::env::var("TASK_DATA_DIR").unwrap_or_else(|_| DEFAULT_TASK_DATA_DIR.into());
    let store_kind = store_kind_from_env_value(std::env::var("TASKBOARD_STORE").ok())?;

    let core = CoreConfig::new(PathBuf::from(task_data_dir), store_kind)?;
    Ok(ServerSettings { addr, core })
}

/// Build the REST router.
///
/// CORS is fully open: any origin, method and header is allowed.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the configured store, bind `settings.addr` and serve until Ctrl-C.
///
/// The store handle lives exactly as long as this call: it is opened before binding and dropped
/// after the server has drained.
///
/// # Errors
/// Returns an error if the store cannot be opened, the address cannot be bound, or the server
/// fails while running.
pub async fn serve(settings: ServerSettings) -> anyhow::Result<()> {
    let task_service = TaskService::open(&settings.core).await?;
    tracing::info!(
        "-- task store: {} ({})",
        settings.core.store_kind(),
        settings.core.task_data_dir().display()
    );

    let listener = tokio::net::TcpListener::bind(&settings.addr).await?;
    tracing::info!("-- Taskboard REST listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(task_service)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Taskboard REST stopped, task store released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
