//! Theme Persistence
//!
//! Local-only presentation state: a `data-theme` attribute on the document
//! element plus one localStorage entry.

use crate::models::Theme;

pub const THEME_STORAGE_KEY: &str = "theme";
const THEME_ATTRIBUTE: &str = "data-theme";

/// Where the theme is remembered and how it is shown
pub trait ThemeBackend {
    /// Previously saved theme, if any
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
    /// Make the theme visible on the page
    fn apply(&self, theme: Theme);
}

/// Browser implementation backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserThemeBackend;

impl BrowserThemeBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }
}

impl ThemeBackend for BrowserThemeBackend {
    fn load(&self) -> Option<Theme> {
        let stored = Self::storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
        let theme = Theme::parse(&stored);
        if theme.is_none() {
            log::warn!("ignoring unknown stored theme {:?}", stored);
        }
        theme
    }

    fn save(&self, theme: Theme) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, theme not saved");
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("failed to save theme: {:?}", err);
        }
    }

    fn apply(&self, theme: Theme) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        match root {
            Some(root) => {
                if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                    log::warn!("failed to apply theme: {:?}", err);
                }
            }
            None => log::warn!("no document element, theme not applied"),
        }
    }
}
