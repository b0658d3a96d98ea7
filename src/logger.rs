//! Console Logger
//!
//! `log` backend that forwards records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[LEVEL target] message`, with the crate prefix stripped from the target
fn format_record(level: Level, target: &str, message: &str) -> String {
    let target = target.strip_prefix("todo_list_ui::").unwrap_or(target);
    format!("[{} {}] {}", level, target, message)
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_strips_crate_prefix() {
        assert_eq!(
            format_record(Level::Error, "todo_list_ui::controller", "load failed"),
            "[ERROR controller] load failed"
        );
        assert_eq!(format_record(Level::Info, "other", "hi"), "[INFO other] hi");
    }
}
