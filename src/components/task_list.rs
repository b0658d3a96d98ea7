//! Task List Component
//!
//! Renders the filtered view of the local collection.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_controller;
use crate::store::TaskListStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let controller = use_controller();
    let tasks = controller.state().tasks();
    let filter = controller.state().filter();

    let visible_tasks = move || {
        tasks.track();
        filter.track();
        controller.visible_tasks()
    };

    view! {
        <ul class="task-list">
            // Keyed by the whole record so a confirmed update re-renders its row
            <For
                each=visible_tasks
                key=|task| task.clone()
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
