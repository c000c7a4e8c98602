//! # Taskboard Core
//!
//! Core task logic for the taskboard system:
//! - The [`Task`] record and [`TaskDraft`] input
//! - The [`TaskStore`](store::TaskStore) document store port with file and in-memory adapters
//! - [`TaskService`], the four operations the API exposes
//! - Startup configuration ([`CoreConfig`])
//!
//! **No API concerns**: HTTP servers, JSON wire types and CORS belong in `api-rest` and
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod service;
pub mod store;
pub mod task;

pub use config::{CoreConfig, StoreKind};
pub use constants::{DEFAULT_REST_ADDR, DEFAULT_TASK_DATA_DIR};
pub use error::{StoreError, StoreResult, TaskError, TaskResult};
pub use service::TaskService;
pub use task::{Task, TaskDraft};
pub use taskboard_uuid::TaskId;
