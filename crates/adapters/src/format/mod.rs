//! Line formatters for the console transport.

pub mod ansi;
pub mod inspect;
pub mod json;
pub mod pretty;

pub use json::JsonFormatter;
pub use pretty::PrettyFormatter;

use envlog_config::{TransportConfig, TransportFormat};
use envlog_ports::LineFormatter;
use std::sync::Arc;

/// Formatter implementing `config`.
#[must_use]
pub fn formatter_for(config: TransportConfig) -> Arc<dyn LineFormatter> {
    match config.format {
        TransportFormat::Pretty => Arc::new(PrettyFormatter::new(config)),
        TransportFormat::Json => Arc::new(JsonFormatter::new().with_timestamp(config.timestamp)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use envlog_domain::{Environment, Level, LogFields};
    use envlog_ports::LogEvent;

    #[test]
    fn environment_class_selects_shape() -> Result<(), Box<dyn std::error::Error>> {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .ok_or("invalid date")?;
        let clock = FixedClock::new(at);
        let event = LogEvent::new(Level::Info, "hello", LogFields::new());

        for environment in [Environment::Stage, Environment::Production] {
            let line = formatter_for(TransportConfig::for_environment(environment))
                .format(&event, &clock);
            assert!(line.starts_with('{'), "{environment}: {line}");
        }
        for environment in [Environment::Development, Environment::Test] {
            let line = formatter_for(TransportConfig::for_environment(environment))
                .format(&event, &clock);
            assert!(line.starts_with("2024-05-01T12:00:00.000Z - "), "{environment}: {line}");
        }
        Ok(())
    }
}
