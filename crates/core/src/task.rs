//! The task record.

use serde::{Deserialize, Serialize};
use taskboard_uuid::TaskId;

/// A stored task.
///
/// `id` is assigned by the store on insert and never changes. `title` and `description` are
/// replaced wholesale by an update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Caller-supplied task content for create and update.
///
/// No field is required here; an empty title is stored as given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Task {
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
        }
    }

    /// Replaces title and description, keeping the identifier.
    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
    }
}
