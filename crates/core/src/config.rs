//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables.

use crate::constants::TASKS_DIR_NAME;
use crate::{TaskError, TaskResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which document store adapter backs the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// One JSON document per task under the data directory.
    #[default]
    File,
    /// Process-local map; contents are lost on exit.
    Memory,
}

impl FromStr for StoreKind {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(TaskError::InvalidInput(format!(
                "unknown store kind '{}' (expected 'file' or 'memory')",
                other
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    task_data_dir: PathBuf,
    store_kind: StoreKind,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidInput`] if a file store is requested with an empty data
    /// directory path.
    pub fn new(task_data_dir: PathBuf, store_kind: StoreKind) -> TaskResult<Self> {
        if store_kind == StoreKind::File && task_data_dir.as_os_str().is_empty() {
            return Err(TaskError::InvalidInput(
                "task_data_dir cannot be empty for the file store".into(),
            ));
        }

        Ok(Self {
            task_data_dir,
            store_kind,
        })
    }

    pub fn task_data_dir(&self) -> &Path {
        &self.task_data_dir
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.task_data_dir.join(TASKS_DIR_NAME)
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }
}

/// Parse the store kind from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`StoreKind::File`].
pub fn store_kind_from_env_value(value: Option<String>) -> TaskResult<StoreKind> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<StoreKind>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_kind_defaults_to_file() {
        assert_eq!(store_kind_from_env_value(None).unwrap(), StoreKind::File);
        assert_eq!(
            store_kind_from_env_value(Some("   ".into())).unwrap(),
            StoreKind::File
        );
    }

    #[test]
    fn test_store_kind_parses_case_insensitively() {
        assert_eq!(
            store_kind_from_env_value(Some("Memory".into())).unwrap(),
            StoreKind::Memory
        );
        assert_eq!(
            store_kind_from_env_value(Some(" file ".into())).unwrap(),
            StoreKind::File
        );
    }

    #[test]
    fn test_store_kind_rejects_unknown_value() {
        let err = store_kind_from_env_value(Some("mongo".into())).unwrap_err();
        assert!(matches!(err, TaskError::InvalidInput(msg) if msg.contains("mongo")));
    }

    #[test]
    fn test_new_rejects_empty_dir_for_file_store() {
        assert!(CoreConfig::new(PathBuf::new(), StoreKind::File).is_err());
        assert!(CoreConfig::new(PathBuf::new(), StoreKind::Memory).is_ok());
    }

    #[test]
    fn test_tasks_dir_is_under_data_dir() {
        let cfg = CoreConfig::new(PathBuf::from("/srv/task_data"), StoreKind::File).unwrap();
        assert_eq!(cfg.tasks_dir(), PathBuf::from("/srv/task_data/tasks"));
        assert_eq!(cfg.store_kind().to_string(), "file");
    }
}
