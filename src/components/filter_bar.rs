//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_controller;
use crate::models::Filter;
use crate::store::TaskListStateStoreFields;

/// All / Completed / Pending selector
#[component]
pub fn FilterBar() -> impl IntoView {
    let controller = use_controller();
    let current = controller.state().filter();

    view! {
        <div class="filter-buttons">
            {Filter::ALL.into_iter().map(|mode| {
                let controller = controller.clone();
                view! {
                    <button
                        class=move || if current.get() == mode { "active" } else { "" }
                        on:click=move |_| controller.set_filter(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
