//! Task operations.
//!
//! [`TaskService`] is a thin pass-through over a [`TaskStore`]: each operation is exactly one
//! store call. It performs no field validation and holds no state of its own beyond the store
//! handle, which is opened once at startup and shared by every request.

use crate::config::{CoreConfig, StoreKind};
use crate::error::{TaskError, TaskResult};
use crate::store::{FileTaskStore, MemoryTaskStore, TaskStore};
use crate::task::{Task, TaskDraft};
use std::sync::Arc;
use taskboard_uuid::TaskId;

/// Create, list, update and delete over a shared [`TaskStore`].
///
/// Cloning is cheap; clones share the same store handle.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    /// Wraps an already opened store.
    ///
    /// # Arguments
    ///
    /// * `store` - Adapter every operation is forwarded to.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Opens the store selected by `cfg` and wraps it in a service.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Store`] if the file store directory cannot be created.
    pub async fn open(cfg: &CoreConfig) -> TaskResult<Self> {
        let store: Arc<dyn TaskStore> = match cfg.store_kind() {
            StoreKind::File => Arc::new(FileTaskStore::open(cfg.tasks_dir()).await?),
            StoreKind::Memory => {
                tracing::info!("using in-memory task store; tasks will not persist");
                Arc::new(MemoryTaskStore::new())
            }
        };
        Ok(Self::new(store))
    }

    /// Persists a new task. An empty title is accepted.
    ///
    /// # Arguments
    ///
    /// * `draft` - Title and description as supplied by the caller.
    ///
    /// # Returns
    ///
    /// The stored task with its newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Store`] if the document cannot be written.
    pub async fn create(&self, draft: TaskDraft) -> TaskResult<Task> {
        let task = self.store.insert(draft).await?;
        tracing::info!("created task {}", task.id);
        Ok(task)
    }

    /// Returns all tasks in store order.
    pub async fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.store.find_all().await?;
        tracing::debug!("listed {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Replaces title and description of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this identifier; nothing is changed.
    pub async fn update(&self, id: &TaskId, draft: TaskDraft) -> TaskResult<Task> {
        match self.store.replace(id, draft).await? {
            Some(task) => {
                tracing::info!("updated task {}", id);
                Ok(task)
            }
            None => Err(TaskError::NotFound(id.to_string())),
        }
    }

    /// Removes a task if present. Deleting an unknown identifier succeeds.
    pub async fn delete(&self, id: &TaskId) -> TaskResult<()> {
        self.store.remove(id).await?;
        tracing::info!("deleted task {}", id);
        Ok(())
    }

    /// Like [`update`](Self::update) for an identifier taken from outside the process.
    ///
    /// A string that is not a canonical identifier cannot name a stored task, so it is reported
    /// as not found.
    pub async fn update_by_str(&self, id: &str, draft: TaskDraft) -> TaskResult<Task> {
        match TaskId::parse(id) {
            Ok(id) => self.update(&id, draft).await,
            Err(e) => {
                tracing::debug!("update with malformed id: {}", e);
                Err(TaskError::NotFound(id.to_string()))
            }
        }
    }

    /// Like [`delete`](Self::delete) for an identifier taken from outside the process.
    ///
    /// A malformed identifier is a no-op.
    pub async fn delete_by_str(&self, id: &str) -> TaskResult<()> {
        match TaskId::parse(id) {
            Ok(id) => self.delete(&id).await,
            Err(e) => {
                tracing::debug!("delete with malformed id ignored: {}", e);
                Ok(())
            }
        }
    }
}
