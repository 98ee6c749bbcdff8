use std::{
    io::{self, Write},
    sync::{OnceLock, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

/// Installs the application logger. Calling this more than once only updates the level.
pub fn init(level: LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Maps the number of `-v` flags onto a level, never going below `base`.
pub fn verbosity_level(base: LevelFilter, verbose: u8) -> LevelFilter {
    let raised = match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    base.max(raised)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: log::Level,
    pub message: String,
    pub source: String,
}

impl Message {
    pub fn format(&self) -> String {
        format!("[{:<5} {}] {}", self.level, self.source, self.message)
    }
}

/// Writes records at or above its level to stderr.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Message {
            level: record.level(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        };

        let _ = writeln!(io::stderr().lock(), "{}", message.format());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_never_lowers_level() {
        assert_eq!(verbosity_level(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(verbosity_level(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(verbosity_level(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(verbosity_level(LevelFilter::Warn, 9), LevelFilter::Trace);
        assert_eq!(verbosity_level(LevelFilter::Debug, 1), LevelFilter::Debug);
    }

    #[test]
    fn filters_by_min_level() {
        let logger = AppLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        logger.set_min_level(LevelFilter::Debug);
        assert_eq!(logger.min_level(), LevelFilter::Debug);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn message_format() {
        let message = Message {
            level: log::Level::Warn,
            message: "hello".to_string(),
            source: "mazesolver::tests".to_string(),
        };
        assert_eq!(message.format(), "[WARN  mazesolver::tests] hello");
    }
}
