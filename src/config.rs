//! Build-time Configuration
//!
//! Values are baked in when the WASM bundle is built:
//! `TODO_API_URL=https://example.org/api/todos/ trunk build`.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/todos/";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection URL of the todo resource, always ending in `/`
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    fn resolve(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        Self {
            api_url: with_trailing_slash(api_url),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
