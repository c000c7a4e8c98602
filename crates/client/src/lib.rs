//! # Taskboard Client
//!
//! Client side of taskboard: a [`TaskApi`] port with a reqwest implementation, and
//! [`TaskBoard`], the state behind a task-list screen.
//!
//! Front-ends (the `taskboard` CLI) drive a `TaskBoard` and render from its accessors; they
//! never talk to the API directly.

pub mod api;
pub mod board;

pub use api::{ClientError, ClientResult, HttpTaskApi, TaskApi, DEFAULT_API_URL};
pub use api_shared::Task;
pub use board::{CreateForm, EditSession, Notice, TaskBoard, NOTICE_TTL};
