//! UI Components
//!
//! Leptos components for the task list.

mod theme_toggle;
mod new_task_form;
mod filter_bar;
mod task_list;
mod task_row;

pub use theme_toggle::ThemeToggle;
pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
