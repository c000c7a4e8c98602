//! Constants used throughout the taskboard core crate.
//!
//! Path and filename constants live here so the store layout is defined in one place.

/// Default directory for task data when no explicit directory is configured.
pub const DEFAULT_TASK_DATA_DIR: &str = "task_data";

/// Directory name (under the data directory) holding task documents.
pub const TASKS_DIR_NAME: &str = "tasks";

/// Filename of a task document inside its sharded directory.
pub const TASK_DOCUMENT_FILENAME: &str = "task.json";

/// Prefix of the temporary file a task document is written to before being renamed into place.
pub const TASK_DOCUMENT_TMP_PREFIX: &str = "task.json.tmp";

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";
