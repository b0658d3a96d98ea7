//! Task Row Component
//!
//! One task: completion checkbox, title or inline editor, and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_controller;
use crate::models::Task;
use crate::store::TaskListStateStoreFields;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let controller = StoredValue::new(use_controller());
    let editing = controller.with_value(|c| c.state().editing());
    let id = StoredValue::new(task.id.clone());
    let completed = task.completed;
    let title = task.title;

    let is_editing = move || editing.with(|edit| {
        edit.as_ref().is_some_and(|edit| id.with_value(|id| &edit.task_id == id))
    });
    let draft = move || editing.with(|edit| {
        edit.as_ref().map(|edit| edit.draft.clone()).unwrap_or_default()
    });

    // Reflects confirmed state only; the click itself never flips the box
    let checked = move || {
        controller.with_value(|c| id.with_value(|id| c.state().with(|s| s.is_completed(id))))
    };

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let (controller, id) = (controller.get_value(), id.get_value());
        spawn_local(async move {
            controller.toggle_completion(&id).await;
        });
    };
    let save = move || {
        let (controller, id) = (controller.get_value(), id.get_value());
        spawn_local(async move {
            controller.save_task(&id).await;
        });
    };
    let remove = move |_| {
        let (controller, id) = (controller.get_value(), id.get_value());
        spawn_local(async move {
            controller.remove_task(&id).await;
        });
    };
    let start_editing = move |_| id.with_value(|id| controller.with_value(|c| c.start_editing(id)));
    let cancel = move || controller.with_value(|c| c.cancel_editing());

    view! {
        <li class=if completed { "completed" } else { "" }>
            <input type="checkbox" prop:checked=checked on:click=toggle />
            {move || if is_editing() {
                view! {
                    <input
                        type="text"
                        class="edit-input"
                        prop:value=draft
                        on:input=move |ev| controller.with_value(|c| c.set_draft(event_target_value(&ev)))
                        on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => cancel(),
                            _ => {}
                        }
                    />
                    <button on:click=move |_| save()>"Save"</button>
                    <button on:click=move |_| cancel()>"Cancel"</button>
                }.into_any()
            } else {
                view! {
                    <span class="task-title">{title.clone()}</span>
                    <button on:click=start_editing>"Edit"</button>
                    <button on:click=remove>"Remove"</button>
                }.into_any()
            }}
        </li>
    }
}
