//! Client-side task list state.
//!
//! [`TaskBoard`] owns everything a task-list screen shows: the fetched tasks, the pending
//! create form, at most one edit session, and a transient notice. User actions are methods;
//! each one issues at most the requests described on it and then updates local state from the
//! response. Nothing is updated optimistically.

use crate::api::TaskApi;
use api_shared::{Task, TaskReq};
use std::time::{Duration, Instant};
use taskboard_types::NonEmptyText;

/// How long a success notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Shown after the server confirms a create.
pub const MSG_ADDED: &str = "Item added successfully";
/// Shown after the server confirms an update.
pub const MSG_UPDATED: &str = "Item updated successfully";
/// Shown after a delete request gets any response from the server.
pub const MSG_DELETED: &str = "Item deleted successfully";
/// Shown when the list cannot be fetched.
pub const ERR_FETCH: &str = "Unable to fetch tasks";
/// Shown when a create request fails.
pub const ERR_CREATE: &str = "Unable to create task";
/// Shown when an update request fails.
pub const ERR_UPDATE: &str = "Unable to update task";
/// Shown when a delete request never reaches the server.
pub const ERR_DELETE: &str = "Unable to delete item";

/// Builds a request body when both fields are non-blank.
fn task_req(title: &str, description: &str) -> Option<TaskReq> {
    let title = NonEmptyText::new(title).ok()?;
    let description = NonEmptyText::new(description).ok()?;
    Some(TaskReq {
        title: title.into_string(),
        description: description.into_string(),
    })
}

/// Pending create-form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub description: String,
}

impl CreateForm {
    fn to_request(&self) -> Option<TaskReq> {
        task_req(&self.title, &self.description)
    }
}

/// The single task currently being edited, with its draft values.
///
/// The identifier is fixed when the session starts; only the drafts are editable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    id: String,
    pub title: String,
    pub description: String,
}

impl EditSession {
    fn for_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    /// Identifier of the task being edited.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn to_request(&self) -> Option<TaskReq> {
        task_req(&self.title, &self.description)
    }
}

/// Feedback from the last user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Disappears [`NOTICE_TTL`] after `shown_at`.
    Success { text: String, shown_at: Instant },
    /// Stays until the next action.
    Error(String),
}

impl Notice {
    fn success(text: &str) -> Self {
        Self::Success {
            text: text.to_string(),
            shown_at: Instant::now(),
        }
    }

    fn error(text: &str) -> Self {
        Self::Error(text.to_string())
    }

    /// The message to display.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text, .. } => text,
            Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    fn is_visible_at(&self, now: Instant) -> bool {
        match self {
            Self::Success { shown_at, .. } => now.saturating_duration_since(*shown_at) < NOTICE_TTL,
            Self::Error(_) => true,
        }
    }
}

/// State behind a task-list screen, driven through a [`TaskApi`].
///
/// Front-ends edit `form` and the open [`EditSession`] directly, call the action methods, and
/// render from the accessors.
pub struct TaskBoard<A> {
    api: A,
    pub form: CreateForm,
    tasks: Vec<Task>,
    edit: Option<EditSession>,
    notice: Option<Notice>,
}

impl<A: TaskApi> TaskBoard<A> {
    /// Creates an empty board over `api`.
    ///
    /// # Arguments
    ///
    /// * `api` - Port used for every request the board makes.
    ///
    /// # Returns
    ///
    /// A board with no tasks, an empty form, no edit session and no notice. Call
    /// [`TaskBoard::load`] to fetch the list.
    pub fn new(api: A) -> Self {
        Self {
            api,
            form: CreateForm::default(),
            tasks: Vec::new(),
            edit: None,
            notice: None,
        }
    }

    /// Tasks as last confirmed by the server.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The open edit session, if any.
    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Draft fields of the open edit session, if any.
    pub fn edit_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    /// The notice as last set, regardless of age.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The notice as it should be displayed at `now`; expired success notices are hidden.
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible_at(now))
    }

    fn clear_error(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_error) {
            self.notice = None;
        }
    }

    /// Fetches the full list and replaces local state with it.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(tasks) => {
                tracing::debug!("loaded {} tasks", tasks.len());
                self.tasks = tasks;
            }
            Err(e) => {
                tracing::warn!("list failed: {}", e);
                self.notice = Some(Notice::error(ERR_FETCH));
            }
        }
    }

    /// Sends the create form if both fields are non-blank.
    ///
    /// Returns `false` without issuing a request when validation fails; the list and form are
    /// left as they were.
    pub async fn submit_create(&mut self) -> bool {
        self.clear_error();
        let Some(req) = self.form.to_request() else {
            return false;
        };

        match self.api.create(req).await {
            Ok(task) => {
                self.tasks.push(task);
                self.form = CreateForm::default();
                self.notice = Some(Notice::success(MSG_ADDED));
            }
            Err(e) => {
                tracing::warn!("create failed: {}", e);
                self.notice = Some(Notice::error(ERR_CREATE));
            }
        }
        true
    }

    /// Opens an edit session on the task with `id`, copying its fields into the drafts.
    ///
    /// An already open session is replaced without being cancelled. Returns `false` if no
    /// local task has this identifier.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => {
                self.edit = Some(EditSession::for_task(task));
                true
            }
            None => false,
        }
    }

    /// Sends the open edit session if both drafts are non-blank.
    ///
    /// On success the matching local entry is patched in place and the session closes. On
    /// failure the session stays open. Returns `false` if no request was issued.
    pub async fn submit_update(&mut self) -> bool {
        self.clear_error();
        let Some((id, req)) = self
            .edit
            .as_ref()
            .and_then(|s| s.to_request().map(|req| (s.id.clone(), req)))
        else {
            return false;
        };

        match self.api.update(&id, req).await {
            Ok(updated) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.title = updated.title;
                    task.description = updated.description;
                }
                self.edit = None;
                self.notice = Some(Notice::success(MSG_UPDATED));
            }
            Err(e) => {
                tracing::warn!("update of {} failed: {}", id, e);
                self.notice = Some(Notice::error(ERR_UPDATE));
            }
        }
        true
    }

    /// Closes the edit session without contacting the server.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Deletes the task with `id` once `confirm` agrees.
    ///
    /// Whenever the server answers, whatever the status, the list is re-fetched rather than
    /// edited locally and [`MSG_DELETED`] is shown. Only a request that never got a response
    /// shows [`ERR_DELETE`]. Returns `false` if the user declined.
    pub async fn delete(&mut self, id: &str, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        self.clear_error();

        match self.api.delete(id).await {
            Ok(()) => {}
            Err(e) if e.is_response() => {
                tracing::warn!("delete of {} rejected: {}", id, e);
            }
            Err(e) => {
                tracing::warn!("delete of {} failed: {}", id, e);
                self.notice = Some(Notice::error(ERR_DELETE));
                return true;
            }
        }

        self.load().await;
        if !self.notice.as_ref().is_some_and(Notice::is_error) {
            self.notice = Some(Notice::success(MSG_DELETED));
        }
        true
    }
}
