//! Custom logging module.
//!
//! This module provides a logger that captures log entries into a bounded
//! buffer shared with the application state for display in the log panel.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for display.
///
pub const MAX_ENTRIES: usize = 500;

/// Shared, bounded list of formatted log lines.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that appends formatted records to a `LogBuffer`.
///
pub struct CustomLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, buffer: LogBuffer) -> Self {
        CustomLogger { level, buffer }
    }

    /// Install as the global logger. Returns the buffer it writes to.
    ///
    pub fn init(level: LevelFilter) -> Result<LogBuffer, log::SetLoggerError> {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::with_capacity(MAX_ENTRIES)));
        log::set_boxed_logger(Box::new(CustomLogger::new(level, Arc::clone(&buffer))))?;
        log::set_max_level(level);
        Ok(buffer)
    }

    fn push(&self, line: String) {
        // A poisoned buffer only loses log lines; logging must never panic.
        if let Ok(mut entries) = self.buffer.lock() {
            if entries.len() >= MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("folio_tui")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.push(format_log(record));
        }
    }

    fn flush(&self) {
        // No-op
    }
}
