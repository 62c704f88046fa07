//! The environment-aware logger.

use envlog_adapters::{ConsoleLogger, LogSink};
use envlog_config::{LoggerOptions, StreamRouting, TransportConfig};
use envlog_domain::{Environment, Level, LogFields, OptionsError, merge_fields};
use envlog_ports::{Clock, LogEvent, LoggerPort};
use std::sync::Arc;

/// Validated logger with fixed base metadata.
///
/// Environment, level, transport and base metadata are fixed at
/// construction. Every call merges the base metadata with the call-site
/// fields (call-site wins) and forwards one event to the console backend.
#[derive(Debug, Clone)]
pub struct Logger {
    environment: Environment,
    level: Level,
    transport: TransportConfig,
    base_fields: LogFields,
    backend: ConsoleLogger,
}

impl Logger {
    /// Build a logger writing to the process streams.
    ///
    /// Fails with [`OptionsError`] when the level or environment is unknown.
    /// The level is checked first.
    pub fn new(options: &LoggerOptions, base_fields: LogFields) -> Result<Self, OptionsError> {
        Self::builder(options.clone())
            .with_base_fields(base_fields)
            .build()
    }

    /// Start a builder for `options`.
    #[must_use]
    pub fn builder(options: LoggerOptions) -> LoggerBuilder {
        LoggerBuilder::new(options)
    }

    /// Validated environment.
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Minimum level emitted.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Transport profile chosen for the environment.
    pub const fn transport(&self) -> TransportConfig {
        self.transport
    }

    /// Metadata attached to every event.
    pub const fn base_fields(&self) -> &LogFields {
        &self.base_fields
    }

    /// Returns true when an event at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        self.backend.enabled(level)
    }

    /// Log at `debug`.
    pub fn debug(&self, message: &str, fields: LogFields) {
        self.emit(Level::Debug, message, fields);
    }

    /// Log at `info`.
    pub fn info(&self, message: &str, fields: LogFields) {
        self.emit(Level::Info, message, fields);
    }

    /// Log at `warn`.
    pub fn warn(&self, message: &str, fields: LogFields) {
        self.emit(Level::Warn, message, fields);
    }

    /// Log at `error`.
    pub fn error(&self, message: &str, fields: LogFields) {
        self.emit(Level::Error, message, fields);
    }

    /// Log at `test`.
    pub fn test(&self, message: &str, fields: LogFields) {
        self.emit(Level::Test, message, fields);
    }

    /// Log at `debug` with base metadata only.
    pub fn debug_message(&self, message: &str) {
        self.emit(Level::Debug, message, LogFields::new());
    }

    /// Log at `info` with base metadata only.
    pub fn info_message(&self, message: &str) {
        self.emit(Level::Info, message, LogFields::new());
    }

    /// Log at `warn` with base metadata only.
    pub fn warn_message(&self, message: &str) {
        self.emit(Level::Warn, message, LogFields::new());
    }

    /// Log at `error` with base metadata only.
    pub fn error_message(&self, message: &str) {
        self.emit(Level::Error, message, LogFields::new());
    }

    /// Log at `test` with base metadata only.
    pub fn test_message(&self, message: &str) {
        self.emit(Level::Test, message, LogFields::new());
    }

    /// Log at a level chosen at runtime.
    pub fn log(&self, level: Level, message: &str, fields: LogFields) {
        self.emit(level, message, fields);
    }

    fn emit(&self, level: Level, message: &str, fields: LogFields) {
        if !self.backend.enabled(level) {
            return;
        }
        let merged = merge_fields(&self.base_fields, fields);
        self.backend.log(LogEvent::new(level, message, merged));
    }
}

/// Builder for [`Logger`] with injectable clock, sinks and routing.
pub struct LoggerBuilder {
    options: LoggerOptions,
    base_fields: LogFields,
    routing: StreamRouting,
    clock: Option<Arc<dyn Clock>>,
    sinks: Option<(Arc<dyn LogSink>, Arc<dyn LogSink>)>,
}

impl LoggerBuilder {
    /// Builder with no base metadata, default routing, and the process streams.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            options,
            base_fields: LogFields::new(),
            routing: StreamRouting::default(),
            clock: None,
            sinks: None,
        }
    }

    /// Metadata attached to every event.
    #[must_use]
    pub fn with_base_fields(mut self, base_fields: LogFields) -> Self {
        self.base_fields = base_fields;
        self
    }

    /// Level-to-stream assignment.
    #[must_use]
    pub fn with_routing(mut self, routing: StreamRouting) -> Self {
        self.routing = routing;
        self
    }

    /// Clock used for timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace the stdout and stderr sinks.
    #[must_use]
    pub fn with_sinks(mut self, stdout: Arc<dyn LogSink>, stderr: Arc<dyn LogSink>) -> Self {
        self.sinks = Some((stdout, stderr));
        self
    }

    /// Validate the options and construct the logger.
    pub fn build(self) -> Result<Logger, OptionsError> {
        let validated = self.options.validate().map_err(|error| {
            tracing::debug!(%error, "logger options rejected");
            error
        })?;
        let transport = TransportConfig::for_environment(validated.environment);

        let mut backend =
            ConsoleLogger::new(validated.level, transport).with_routing(self.routing);
        if let Some(clock) = self.clock {
            backend = backend.with_clock(clock);
        }
        if let Some((stdout, stderr)) = self.sinks {
            backend = backend.with_sinks(stdout, stderr);
        }

        tracing::debug!(
            environment = %validated.environment,
            level = %validated.level,
            format = %transport.format,
            base_fields = self.base_fields.len(),
            "logger constructed"
        );

        Ok(Logger {
            environment: validated.environment,
            level: validated.level,
            transport,
            base_fields: self.base_fields,
            backend,
        })
    }
}
