//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state is a
//! lagging mirror of the last confirmed server state plus local UI state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task, TaskId, Theme};

/// The one task currently being edited
#[derive(Clone, Debug, PartialEq)]
pub struct EditState {
    pub task_id: TaskId,
    pub draft: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Tasks in server response / append order
    pub tasks: Vec<Task>,
    /// New task input buffer
    pub input: String,
    pub editing: Option<EditState>,
    pub filter: Filter,
    pub theme: Theme,
}

impl TaskListState {
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Swap in the server's copy of a task. Returns false if it is gone locally.
    pub fn replace(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == updated.id) {
            Some(task) => {
                *task = updated;
                true
            }
            None => false,
        }
    }

    /// Last confirmed completion flag; false for tasks not loaded
    pub fn is_completed(&self, id: &TaskId) -> bool {
        self.find(id).is_some_and(|task| task.completed)
    }

    pub fn remove(&mut self, id: &TaskId) {
        self.tasks.retain(|task| &task.id != id);
    }

    /// Tasks passing the current filter, in collection order
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        visible(&self.tasks, self.filter)
    }

    /// (total, completed, pending)
    pub fn counts(&self) -> (usize, usize, usize) {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        (self.tasks.len(), completed, self.tasks.len() - completed)
    }
}

pub fn visible(tasks: &[Task], filter: Filter) -> impl Iterator<Item = &Task> + '_ {
    tasks.iter().filter(move |task| filter.matches(task))
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

/// Shared, interior-mutable handle to the state.
///
/// Reads and writes are short and synchronous; nothing holds the state
/// across an `.await`.
pub trait StateCell: Clone + 'static {
    fn peek<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R;
    fn modify(&self, f: impl FnOnce(&mut TaskListState));
}

impl StateCell for TaskStore {
    fn peek<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut TaskListState)) {
        self.update(f);
    }
}
