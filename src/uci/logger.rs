//! Forwards `log` records to the GUI as `info string` lines.

use log::{LevelFilter, Log, Metadata, Record};

struct UciLogger;

static LOGGER: UciLogger = UciLogger;

impl Log for UciLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record<'_>) -> String {
    let text = record.args().to_string().replace('\n', " ");
    format!("info string {} {}", record.level().as_str().to_ascii_lowercase(), text)
}

/// Install the logger with warnings enabled. A second call leaves the
/// installed logger in place.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }
}

/// `debug on` shows debug records, `debug off` only warnings.
pub fn set_debug(enabled: bool) {
    log::set_max_level(if enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}
