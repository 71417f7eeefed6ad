//! Console Logger
//!
//! `log` backend for browser apps. Records are formatted as
//! `[HH:MM:SS.mmm LEVEL target] message` and routed to the console
//! method matching their level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            &timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Local wall-clock time as `HH:MM:SS.mmm`
fn timestamp() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
        now.get_milliseconds()
    )
}

fn format_line(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{} {:<5} {}] {}", time, level, target, message)
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger as the global `log` backend
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("09:05:01.042", Level::Warn, "kanban_core::storage", "ignoring malformed tasks_1");
        assert_eq!(line, "[09:05:01.042 WARN  kanban_core::storage] ignoring malformed tasks_1");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_init_logger_installs_once() {
        assert!(init_logger(LevelFilter::Warn).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Warn);
        assert!(init_logger(LevelFilter::Debug).is_err());
    }
}
