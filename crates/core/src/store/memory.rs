use super::TaskStore;
use crate::error::StoreResult;
use crate::task::{Task, TaskDraft};
use async_trait::async_trait;
use std::collections::BTreeMap;
use taskboard_uuid::TaskId;
use tokio::sync::RwLock;

/// In-process store keyed by identifier.
///
/// Nothing survives a restart. Used by tests and when `TASKBOARD_STORE=memory`.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<BTreeMap<TaskId, Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, draft: TaskDraft) -> StoreResult<Task> {
        let task = Task::from_draft(TaskId::new(), draft);
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn replace(&self, id: &TaskId, draft: TaskDraft) -> StoreResult<Option<Task>> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.get_mut(id).map(|task| {
            task.apply(draft);
            task.clone()
        }))
    }

    async fn remove(&self, id: &TaskId) -> StoreResult<()> {
        self.tasks.write().await.remove(id);
        Ok(())
    }
}
