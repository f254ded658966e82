use std::io::Write;

use log::{Level, LevelFilter, Metadata, Record};

/// Writes `LEVEL: message` lines to stderr.
pub struct Logger;

static LOGGER: Logger = Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}: {}", label(record.level()), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "FATAL",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

pub fn level_filter(debug: bool, verbose: bool) -> LevelFilter {
    match (debug, verbose) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Info,
        (false, false) => LevelFilter::Warn,
    }
}

pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_should_prefer_debug() {
        assert_eq!(level_filter(true, true), LevelFilter::Debug);
        assert_eq!(level_filter(true, false), LevelFilter::Debug);
        assert_eq!(level_filter(false, true), LevelFilter::Info);
        assert_eq!(level_filter(false, false), LevelFilter::Warn);
    }

    #[test]
    fn errors_should_be_labelled_fatal() {
        assert_eq!(label(Level::Error), "FATAL");
        assert_eq!(label(Level::Info), "INFO");
    }
}
