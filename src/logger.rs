//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to the application state for display in the log panel.

use crate::error::AppError;
use crate::events::terminal::{Event, EventSender};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Only records from this crate reach the log panel.
///
const LOG_TARGET_PREFIX: &str = "arc_timer";

type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Custom logger that hands formatted records to a callback.
///
#[derive(Clone)]
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<LogCallback>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Forward every formatted record onto the event channel.
    ///
    pub fn forward_to(&self, sender: EventSender) {
        let sender = Mutex::new(sender);
        self.set_log_callback(Box::new(move |line| {
            if let Ok(sender) = sender.lock() {
                // The render loop may already be gone
                let _ = sender.send(Event::Log(line));
            }
        }));
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(LOG_TARGET_PREFIX)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger.
///
pub fn init(logger: CustomLogger) -> Result<(), AppError> {
    let level = logger.level;
    log::set_logger(Box::leak(Box::new(logger))).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
