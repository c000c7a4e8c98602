//! Document store port and adapters.
//!
//! [`TaskStore`] is the only way the service touches persisted tasks. Two adapters are provided:
//!
//! - [`FileTaskStore`]: one JSON document per task in a sharded directory tree.
//! - [`MemoryTaskStore`]: a process-local ordered map.
//!
//! Both return tasks in ascending identifier order, which for time-ordered identifiers is
//! creation order.

mod file;
mod memory;

pub use file::FileTaskStore;
pub use memory::MemoryTaskStore;

use crate::error::StoreResult;
use crate::task::{Task, TaskDraft};
use async_trait::async_trait;
use taskboard_uuid::TaskId;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task under a freshly allocated identifier and returns it.
    async fn insert(&self, draft: TaskDraft) -> StoreResult<Task>;

    /// Returns every stored task. An empty store yields an empty vector.
    async fn find_all(&self) -> StoreResult<Vec<Task>>;

    /// Replaces title and description of the task with `id`.
    ///
    /// Returns `None` without mutating anything when no such task exists.
    async fn replace(&self, id: &TaskId, draft: TaskDraft) -> StoreResult<Option<Task>>;

    /// Removes the task with `id`. Removing an absent task is not an error.
    async fn remove(&self, id: &TaskId) -> StoreResult<()>;
}
