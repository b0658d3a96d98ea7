//! New Task Form Component
//!
//! Input buffer plus submit button for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_controller;
use crate::store::TaskListStateStoreFields;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let controller = use_controller();
    let input = controller.state().input();

    let add_task = {
        let controller = controller.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let title = input.get_untracked();
            let controller = controller.clone();
            // Input is cleared by the controller once the server confirms
            spawn_local(async move {
                controller.add_task(&title).await;
            });
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || input.get()
                on:input=move |ev| controller.set_input(event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
