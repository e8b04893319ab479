use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

pub trait DebugOutput: Send + Sync {
    fn write_str(&self, s: &str);
}

lazy_static! {
    static ref DEBUG_OUTPUT: Mutex<Option<&'static dyn DebugOutput>> = Mutex::new(None);
}

struct DebugLogger;

static LOGGER: DebugLogger = DebugLogger;

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(output) = *DEBUG_OUTPUT.lock() {
            let line = format!("[{}] {}: {}\n", record.level(), record.target(), record.args());
            output.write_str(&line);
        }
    }

    fn flush(&self) {}
}

/// Routes `log` records to `output`. Records are dropped until this runs.
pub fn init_debug(
    output: &'static dyn DebugOutput,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    *DEBUG_OUTPUT.lock() = Some(output);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture(Mutex<String>);

    impl DebugOutput for Capture {
        fn write_str(&self, s: &str) {
            self.0.lock().push_str(s);
        }
    }

    static LOGGED: Capture = Capture(Mutex::new(String::new()));

    #[test]
    fn logger_formats_records_into_output() {
        init_debug(&LOGGED, LevelFilter::Debug).unwrap();
        log::debug!(target: "guess", "target drawn");
        log::trace!(target: "guess", "hidden");
        let text = LOGGED.0.lock().clone();
        assert!(text.contains("[DEBUG] guess: target drawn\n"));
        assert!(!text.contains("hidden"));
    }
}
