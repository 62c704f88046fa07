//! Structured logging boundary contract.

use envlog_domain::{Level, LogFields};

/// Structured log event, metadata already merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Severity.
    pub level: Level,
    /// Human-readable message.
    pub message: Box<str>,
    /// Effective metadata for this call.
    pub fields: LogFields,
}

impl LogEvent {
    /// Create an event.
    pub fn new(level: Level, message: impl Into<Box<str>>, fields: LogFields) -> Self {
        Self {
            level,
            message: message.into(),
            fields,
        }
    }
}

/// Boundary contract for the backend that filters, formats, and writes events.
pub trait LoggerPort: Send + Sync {
    /// Emit an event. Implementations drop events below their threshold.
    fn log(&self, event: LogEvent);

    /// Minimum level this backend emits.
    fn min_level(&self) -> Level;

    /// Returns true when an event at `level` would be written.
    fn enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.min_level())
    }

    /// Convenience: debug event.
    fn debug(&self, message: &str, fields: LogFields) {
        self.log(LogEvent::new(Level::Debug, message, fields));
    }

    /// Convenience: info event.
    fn info(&self, message: &str, fields: LogFields) {
        self.log(LogEvent::new(Level::Info, message, fields));
    }

    /// Convenience: warn event.
    fn warn(&self, message: &str, fields: LogFields) {
        self.log(LogEvent::new(Level::Warn, message, fields));
    }

    /// Convenience: error event.
    fn error(&self, message: &str, fields: LogFields) {
        self.log(LogEvent::new(Level::Error, message, fields));
    }

    /// Convenience: test event.
    fn test(&self, message: &str, fields: LogFields) {
        self.log(LogEvent::new(Level::Test, message, fields));
    }
}
