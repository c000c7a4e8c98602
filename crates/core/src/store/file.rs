//! File-backed document store.
//!
//! ## Storage Layout
//!
//! ```text
//! <task_data_dir>/tasks/
//!   <s1>/
//!     <s2>/
//!       <id>/
//!         task.json
//! ```
//!
//! where `s1`/`s2` come from [`TaskId::sharded_dir`]. A document is rewritten by writing a
//! uniquely named temp file next to it and renaming it over `task.json`, so a reader sees either
//! the old or the new document.

use super::TaskStore;
use crate::constants::{TASK_DOCUMENT_FILENAME, TASK_DOCUMENT_TMP_PREFIX};
use crate::error::{StoreError, StoreResult};
use crate::task::{Task, TaskDraft};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use taskboard_uuid::TaskId;
use tokio::fs;

/// [`TaskStore`] keeping one JSON document per task under a sharded directory tree.
#[derive(Clone, Debug)]
pub struct FileTaskStore {
    tasks_dir: PathBuf,
}

impl FileTaskStore {
    /// Opens the store rooted at `tasks_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DirCreation`] if the directory cannot be created.
    pub async fn open(tasks_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let tasks_dir = tasks_dir.into();
        fs::create_dir_all(&tasks_dir)
            .await
            .map_err(StoreError::DirCreation)?;
        tracing::info!("opened file task store at {}", tasks_dir.display());
        Ok(Self { tasks_dir })
    }

    pub fn tasks_dir(&self) -> &Path {
        &self.tasks_dir
    }

    fn task_dir(&self, id: &TaskId) -> PathBuf {
        id.sharded_dir(&self.tasks_dir)
    }

    async fn read_document(path: &Path) -> StoreResult<Option<Task>> {
        match fs::read_to_string(path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(StoreError::Deserialization),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::FileRead(e)),
        }
    }

    async fn write_document(task_dir: &Path, task: &Task) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(task).map_err(StoreError::Serialization)?;
        let tmp_path = task_dir.join(format!("{}.{}", TASK_DOCUMENT_TMP_PREFIX, TaskId::new()));

        fs::write(&tmp_path, json)
            .await
            .map_err(StoreError::FileWrite)?;
        if let Err(e) = fs::rename(&tmp_path, task_dir.join(TASK_DOCUMENT_FILENAME)).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StoreError::FileWrite(e));
        }
        Ok(())
    }

    /// Lists child directories of `path`; plain files such as temp documents are skipped.
    ///
    /// A shard directory that vanished before it could be read (a concurrent delete) lists as
    /// empty. The store root itself must exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FileRead`] if the directory cannot be read.
    async fn subdirs(path: &Path, is_root: bool) -> StoreResult<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        let mut entries = match fs::read_dir(path).await {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound && !is_root => return Ok(dirs),
            Err(e) => return Err(StoreError::FileRead(e)),
        };
        while let Some(entry) = entries.next_entry().await.map_err(StoreError::FileRead)? {
            match entry.file_type().await {
                Ok(ft) if ft.is_dir() => dirs.push(entry.path()),
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(StoreError::FileRead(e)),
            }
        }
        Ok(dirs)
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn insert(&self, draft: TaskDraft) -> StoreResult<Task> {
        let task = Task::from_draft(TaskId::new(), draft);
        let task_dir = self.task_dir(&task.id);

        fs::create_dir_all(&task_dir)
            .await
            .map_err(StoreError::DirCreation)?;
        if let Err(e) = Self::write_document(&task_dir, &task).await {
            let _ = fs::remove_dir_all(&task_dir).await;
            return Err(e);
        }

        Ok(task)
    }

    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        let mut tasks = Vec::new();

        for s1 in Self::subdirs(&self.tasks_dir, true).await? {
            for s2 in Self::subdirs(&s1, false).await? {
                for task_dir in Self::subdirs(&s2, false).await? {
                    let path = task_dir.join(TASK_DOCUMENT_FILENAME);
                    match Self::read_document(&path).await {
                        Ok(Some(task)) => tasks.push(task),
                        // Removed between listing and reading.
                        Ok(None) => continue,
                        Err(StoreError::Deserialization(e)) => {
                            tracing::warn!(
                                "failed to parse task document: {} - {}",
                                path.display(),
                                e
                            );
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tasks)
    }

    async fn replace(&self, id: &TaskId, draft: TaskDraft) -> StoreResult<Option<Task>> {
        let task_dir = self.task_dir(id);
        let Some(mut task) = Self::read_document(&task_dir.join(TASK_DOCUMENT_FILENAME)).await?
        else {
            return Ok(None);
        };

        task.apply(draft);
        Self::write_document(&task_dir, &task).await?;
        Ok(Some(task))
    }

    async fn remove(&self, id: &TaskId) -> StoreResult<()> {
        match fs::remove_dir_all(self.task_dir(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::FileRemove(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_store(temp_dir: &TempDir) -> FileTaskStore {
        FileTaskStore::open(temp_dir.path().join("tasks"))
            .await
            .expect("open should succeed")
    }

    #[tokio::test]
    async fn test_open_creates_tasks_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;

        assert!(store.tasks_dir().is_dir());
    }

    #[tokio::test]
    async fn test_insert_writes_sharded_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;

        let task = store
            .insert(TaskDraft::new("Buy milk", "2%"))
            .await
            .expect("insert should succeed");

        let path = task
            .id
            .sharded_dir(store.tasks_dir())
            .join(TASK_DOCUMENT_FILENAME);
        assert!(path.is_file(), "task.json should exist");

        let stored: Task =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored, task);
    }

    #[tokio::test]
    async fn test_find_all_on_empty_store_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_returns_creation_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;

        let mut created = Vec::new();
        for title in ["first", "second", "third"] {
            created.push(store.insert(TaskDraft::new(title, "")).await.unwrap());
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let listed = store.find_all().await.unwrap();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_find_all_skips_unparseable_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;
        let valid = store.insert(TaskDraft::new("valid", "")).await.unwrap();

        let broken_dir = TaskId::new().sharded_dir(store.tasks_dir());
        std::fs::create_dir_all(&broken_dir).unwrap();
        std::fs::write(broken_dir.join(TASK_DOCUMENT_FILENAME), "{ not json").unwrap();

        let listed = store.find_all().await.unwrap();
        assert_eq!(listed, vec![valid]);
    }

    #[tokio::test]
    async fn test_find_all_fails_when_root_is_not_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;
        store.insert(TaskDraft::new("Buy milk", "2%")).await.unwrap();

        std::fs::remove_dir_all(store.tasks_dir()).unwrap();
        std::fs::write(store.tasks_dir(), "not a directory").unwrap();

        let result = store.find_all().await;
        assert!(
            matches!(result, Err(StoreError::FileRead(_))),
            "expected FileRead error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_find_all_fails_when_root_is_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;

        std::fs::remove_dir_all(store.tasks_dir()).unwrap();

        assert!(matches!(
            store.find_all().await,
            Err(StoreError::FileRead(_))
        ));
    }

    #[tokio::test]
    async fn test_find_all_skips_stray_files_in_shards() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;
        let task = store.insert(TaskDraft::new("kept", "")).await.unwrap();

        std::fs::write(store.tasks_dir().join("README"), "stray").unwrap();

        assert_eq!(store.find_all().await.unwrap(), vec![task]);
    }

    #[tokio::test]
    async fn test_replace_rewrites_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;
        let task = store.insert(TaskDraft::new("A", "desc")).await.unwrap();

        let updated = store
            .replace(&task.id, TaskDraft::new("B", "desc"))
            .await
            .unwrap()
            .expect("task should exist");

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.title, "B");
        assert_eq!(store.find_all().await.unwrap(), vec![updated]);

        let leftovers: Vec<_> = std::fs::read_dir(task.id.sharded_dir(store.tasks_dir()))
            .unwrap()
            .flatten()
            .filter(|e| e.file_name() != TASK_DOCUMENT_FILENAME)
            .collect();
        assert!(leftovers.is_empty(), "temp files should be renamed away");
    }

    #[tokio::test]
    async fn test_replace_missing_returns_none_without_creating_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;
        let missing = TaskId::new();

        let result = store
            .replace(&missing, TaskDraft::new("x", "y"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!missing.sharded_dir(store.tasks_dir()).exists());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&temp_dir).await;
        let task = store.insert(TaskDraft::new("gone", "")).await.unwrap();

        store.remove(&task.id).await.expect("first remove");
        store.remove(&task.id).await.expect("second remove");
        store.remove(&TaskId::new()).await.expect("never existed");

        assert!(store.find_all().await.unwrap().is_empty());
    }
}
