//! Console logger adapter: level filter, line formatter, and stream routing.

use crate::clock::SystemClock;
use crate::format::formatter_for;
use crate::log_sink::{LogSink, StderrLogSink, StdoutLogSink};
use envlog_config::{OutputStream, StreamRouting, TransportConfig};
use envlog_ports::{Clock, Level, LineFormatter, LogEvent, LoggerPort};
use std::fmt;
use std::sync::Arc;

/// Console logger emitting one line per event on stdout or stderr.
#[derive(Clone)]
pub struct ConsoleLogger {
    min_level: Level,
    formatter: Arc<dyn LineFormatter>,
    routing: StreamRouting,
    stdout: Arc<dyn LogSink>,
    stderr: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
}

impl ConsoleLogger {
    /// Create a logger for `transport` writing to the process streams.
    #[must_use]
    pub fn new(min_level: Level, transport: TransportConfig) -> Self {
        Self {
            min_level,
            formatter: formatter_for(transport),
            routing: StreamRouting::default(),
            stdout: Arc::new(StdoutLogSink),
            stderr: Arc::new(StderrLogSink),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the level-to-stream assignment.
    #[must_use]
    pub fn with_routing(mut self, routing: StreamRouting) -> Self {
        self.routing = routing;
        self
    }

    /// Replace both output sinks.
    #[must_use]
    pub fn with_sinks(mut self, stdout: Arc<dyn LogSink>, stderr: Arc<dyn LogSink>) -> Self {
        self.stdout = stdout;
        self.stderr = stderr;
        self
    }

    /// Replace the clock used for timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn sink_for(&self, level: Level) -> &dyn LogSink {
        match self.routing.stream_for(level) {
            OutputStream::Stdout => self.stdout.as_ref(),
            OutputStream::Stderr => self.stderr.as_ref(),
        }
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConsoleLogger")
            .field("min_level", &self.min_level)
            .field("routing", &self.routing)
            .finish_non_exhaustive()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, event: LogEvent) {
        if !self.enabled(event.level) {
            return;
        }

        let mut line = self.formatter.format(&event, self.clock.as_ref());
        line.push('\n');
        self.sink_for(event.level).write_line(&line);
    }

    fn min_level(&self) -> Level {
        self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::log_sink::MemoryLogSink;
    use chrono::{TimeZone, Utc};
    use envlog_domain::{Environment, LogFields, fields};
    use serde_json::json;

    struct Harness {
        logger: ConsoleLogger,
        stdout: Arc<MemoryLogSink>,
        stderr: Arc<MemoryLogSink>,
    }

    fn harness(min_level: Level, environment: Environment) -> Result<Harness, &'static str> {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .ok_or("invalid date")?;
        let stdout = Arc::new(MemoryLogSink::new());
        let stderr = Arc::new(MemoryLogSink::new());
        let logger = ConsoleLogger::new(min_level, TransportConfig::for_environment(environment))
            .with_sinks(stdout.clone(), stderr.clone())
            .with_clock(Arc::new(FixedClock::new(at)));
        Ok(Harness {
            logger,
            stdout,
            stderr,
        })
    }

    #[test]
    fn debug_goes_to_stderr_with_trailing_newline() -> Result<(), &'static str> {
        let harness = harness(Level::Debug, Environment::Development)?;
        harness.logger.debug("hello", LogFields::new());

        assert_eq!(
            harness.stderr.take(),
            vec!["2024-05-01T12:00:00.000Z - \u{1b}[34mdebug\u{1b}[39m: hello\n".to_string()]
        );
        assert!(harness.stdout.is_empty());
        Ok(())
    }

    #[test]
    fn production_debug_is_json_on_stderr() -> Result<(), &'static str> {
        let harness = harness(Level::Debug, Environment::Production)?;
        harness.logger.debug("hello", LogFields::new());

        assert_eq!(
            harness.stderr.take(),
            vec![
                "{\"level\":\"debug\",\"message\":\"hello\",\"timestamp\":\"2024-05-01T12:00:00.000Z\"}\n"
                    .to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn default_routing_splits_streams() -> Result<(), &'static str> {
        let harness = harness(Level::Debug, Environment::Stage)?;
        harness.logger.test("t", LogFields::new());
        harness.logger.error("e", LogFields::new());
        harness.logger.warn("w", LogFields::new());
        harness.logger.info("i", LogFields::new());
        harness.logger.debug("d", LogFields::new());

        assert_eq!(harness.stdout.len(), 3);
        assert_eq!(harness.stderr.len(), 2);
        Ok(())
    }

    #[test]
    fn events_below_threshold_are_dropped() -> Result<(), &'static str> {
        let harness = harness(Level::Info, Environment::Test)?;
        harness.logger.debug("quiet", LogFields::new());
        harness.logger.info("loud", fields([("n", json!(1))]));

        assert!(harness.stderr.is_empty());
        assert_eq!(harness.stdout.len(), 1);
        Ok(())
    }

    #[test]
    fn custom_routing_is_honored() -> Result<(), &'static str> {
        let harness = harness(Level::Debug, Environment::Production)?;
        let logger = harness
            .logger
            .clone()
            .with_routing(StreamRouting::with_stderr_levels([Level::Warn]));
        logger.warn("w", LogFields::new());
        logger.error("e", LogFields::new());

        assert_eq!(harness.stderr.len(), 1);
        assert_eq!(harness.stdout.len(), 1);
        Ok(())
    }
}
