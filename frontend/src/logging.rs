use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line: JsValue =
            format!("[{}] {}: {}", record.level(), record.target(), record.args()).into();
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn level_for(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logger(debug_mode: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(debug_mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_mode_raises_verbosity() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }
}
