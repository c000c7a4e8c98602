/// Failures raised by a [`TaskStore`](crate::store::TaskStore) adapter.
///
/// The REST layer does not distinguish between these; every variant becomes a generic server
/// error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create store directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to read task document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write task document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to remove task document: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize task: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize task: {0}")]
    Deserialization(serde_json::Error),
}

/// Result type for store adapters.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors returned by [`TaskService`](crate::TaskService) and configuration.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for task operations.
pub type TaskResult<T> = std::result::Result<T, TaskError>;
