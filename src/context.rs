//! Application Context
//!
//! The controller is shared with every component through the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpRemoteStore;
use crate::controller::TaskListController;
use crate::store::TaskStore;
use crate::theme::BrowserThemeBackend;

/// Controller wired to the browser: fetch, localStorage and the reactive store
pub type AppController = TaskListController<HttpRemoteStore, BrowserThemeBackend, TaskStore>;

/// Get the controller from context
pub fn use_controller() -> AppController {
    expect_context::<AppController>()
}
