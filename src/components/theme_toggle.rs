//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::use_controller;
use crate::models::Theme;
use crate::store::TaskListStateStoreFields;

/// Switches between light and dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let controller = use_controller();
    let theme = controller.state().theme();

    let label = move || match theme.get() {
        Theme::Light => "Switch to Dark Mode",
        Theme::Dark => "Switch to Light Mode",
    };

    view! {
        <button class="theme-toggle" on:click=move |_| { controller.toggle_theme(); }>
            {label}
        </button>
    }
}
