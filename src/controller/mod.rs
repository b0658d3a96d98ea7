//! Task List Controller
//!
//! Mirrors every mutation against the remote store and applies the server's
//! answer only after it arrives. Local state never runs ahead of the store.
//!
//! Requests are not sequenced: two overlapping mutations of the same task are
//! applied in the order their responses arrive.

use crate::api::RemoteStore;
use crate::models::{Filter, Task, TaskId, TaskPayload, Theme};
use crate::store::{EditState, StateCell};
use crate::theme::ThemeBackend;


#[derive(Clone)]
pub struct TaskListController<R, T, S> {
    remote: R,
    themes: T,
    state: S,
}

impl<R, T, S> TaskListController<R, T, S>
where
    R: RemoteStore,
    T: ThemeBackend,
    S: StateCell,
{
    pub fn new(remote: R, themes: T, state: S) -> Self {
        Self { remote, themes, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    // ========================
    // Remote round-trips
    // ========================

    /// Replace the collection with the server's. On failure it stays as is.
    pub async fn load(&self) {
        match self.remote.list().await {
            Ok(tasks) => {
                log::info!("loaded {} tasks", tasks.len());
                self.state.modify(|s| s.tasks = tasks);
            }
            Err(err) => log::error!("Error fetching tasks: {}", err),
        }
    }

    /// Create a task. Blank titles are ignored without a request.
    pub async fn add_task(&self, title: &str) {
        if title.trim().is_empty() {
            return;
        }
        match self.remote.create(&TaskPayload::new_pending(title)).await {
            Ok(created) => {
                log::debug!("created task {}", created.id);
                self.state.modify(|s| {
                    s.tasks.push(created);
                    s.input.clear();
                });
            }
            Err(err) => log::error!("Error adding task: {}", err),
        }
    }

    pub async fn remove_task(&self, id: &TaskId) {
        match self.remote.delete(id).await {
            Ok(()) => self.state.modify(|s| s.remove(id)),
            Err(err) => log::error!("Error removing task {}: {}", id, err),
        }
    }

    /// Send the edit draft. Editing stays active if the request fails.
    pub async fn save_task(&self, id: &TaskId) {
        let payload = self.state.peek(|s| {
            let edit = s.editing.as_ref().filter(|edit| &edit.task_id == id)?;
            let draft = edit.draft.as_str();
            s.find(id).map(|task| task.with_title(draft))
        });
        let Some(payload) = payload else {
            log::warn!("save_task: task {} is not loaded or not being edited", id);
            return;
        };

        match self.remote.update(id, &payload).await {
            Ok(updated) => self.state.modify(|s| {
                s.replace(updated);
                s.editing = None;
            }),
            Err(err) => log::error!("Error saving task {}: {}", id, err),
        }
    }

    /// Flip `completed` on the server; the local flag follows the response.
    pub async fn toggle_completion(&self, id: &TaskId) {
        let Some(payload) = self.state.peek(|s| s.find(id).map(Task::toggled)) else {
            log::warn!("toggle_completion: task {} is not loaded", id);
            return;
        };

        match self.remote.update(id, &payload).await {
            Ok(updated) => self.apply_update(updated),
            Err(err) => log::error!("Error toggling completion of task {}: {}", id, err),
        }
    }

    fn apply_update(&self, updated: Task) {
        let id = updated.id.clone();
        let mut found = true;
        self.state.modify(|s| found = s.replace(updated));
        if !found {
            log::debug!("dropping update for task {} removed meanwhile", id);
        }
    }

    // ========================
    // Local state
    // ========================

    pub fn set_input(&self, text: String) {
        self.state.modify(|s| s.input = text);
    }

    /// Edit a task, replacing whatever was being edited before.
    pub fn start_editing(&self, id: &TaskId) {
        let title = self.state.peek(|s| s.find(id).map(|task| task.title.clone()));
        match title {
            Some(draft) => self.state.modify(|s| {
                s.editing = Some(EditState { task_id: id.clone(), draft });
            }),
            None => log::warn!("start_editing: task {} is not loaded", id),
        }
    }

    pub fn set_draft(&self, text: String) {
        self.state.modify(|s| {
            if let Some(edit) = s.editing.as_mut() {
                edit.draft = text;
            }
        });
    }

    pub fn cancel_editing(&self) {
        self.state.modify(|s| s.editing = None);
    }

    pub fn set_filter(&self, filter: Filter) {
        self.state.modify(|s| s.filter = filter);
    }

    /// Filtered snapshot, recomputed on every call
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.state.peek(|s| s.visible_tasks().cloned().collect())
    }

    // ========================
    // Theme
    // ========================

    /// Apply the saved theme, or the default when nothing usable is stored.
    pub fn restore_theme(&self) -> Theme {
        let theme = self.themes.load().unwrap_or_default();
        self.state.modify(|s| s.theme = theme);
        self.themes.apply(theme);
        theme
    }

    pub fn toggle_theme(&self) -> Theme {
        let theme = self.state.peek(|s| s.theme).toggled();
        self.state.modify(|s| s.theme = theme);
        self.themes.apply(theme);
        self.themes.save(theme);
        theme
    }
}
