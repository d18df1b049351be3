use shared::LogLevel;
use std::cell::Cell;

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Info) };
}

/// Browser console logger. Every line carries a timestamp and the name of
/// the component that emitted it.
pub struct Logger;

impl Logger {
    /// Set the minimum level that reaches the console
    pub fn set_level(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn enabled(level: LogLevel) -> bool {
        MIN_LEVEL.with(|min| level >= min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format_line(&timestamp(), component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

fn format_line(timestamp: &str, component: &str, message: &str) -> String {
    format!("{} [{}] {}", timestamp, component, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_level_filtering() {
        Logger::set_level(LogLevel::Warn);
        assert!(!Logger::enabled(LogLevel::Debug));
        assert!(!Logger::enabled(LogLevel::Info));
        assert!(Logger::enabled(LogLevel::Warn));
        assert!(Logger::enabled(LogLevel::Error));
        Logger::set_level(LogLevel::Info);
    }

    #[wasm_bindgen_test]
    fn test_line_format() {
        assert_eq!(
            format_line("2025-06-15T10:00:00.000Z", "employee-form", "submitted"),
            "2025-06-15T10:00:00.000Z [employee-form] submitted"
        );
    }
}
