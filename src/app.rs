//! Todo List App
//!
//! Root component: builds the controller and lays out the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpRemoteStore;
use crate::components::{FilterBar, NewTaskForm, TaskList, ThemeToggle};
use crate::config::AppConfig;
use crate::context::AppController;
use crate::store::TaskListState;
use crate::theme::BrowserThemeBackend;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(TaskListState::default());
    let controller: AppController = AppController::new(
        HttpRemoteStore::new(config.api_url),
        BrowserThemeBackend,
        store,
    );
    controller.restore_theme();

    // Provide controller to all children
    provide_context(controller.clone());

    // Load tasks once on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.load().await;
        });
    });

    let summary = move || {
        let (total, completed, pending) = store.with(TaskListState::counts);
        format!("{} tasks, {} completed, {} pending", total, completed, pending)
    };

    view! {
        <div class="container">
            <h2>"To-Do List"</h2>
            <ThemeToggle />
            <NewTaskForm />
            <FilterBar />
            <TaskList />
            <p class="task-count">{summary}</p>
        </div>
    }
}
