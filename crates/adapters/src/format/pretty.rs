//! Human-readable line formatter for interactive environments.

use super::ansi::Style;
use super::inspect::{inline_fields, inspect_fields};
use envlog_config::TransportConfig;
use envlog_domain::format_timestamp;
use envlog_ports::{Clock, LineFormatter, LogEvent};

/// `<timestamp> - <level>: <message>`, followed by the metadata when present.
#[derive(Debug, Clone, Copy)]
pub struct PrettyFormatter {
    timestamp: bool,
    colorize: bool,
    pretty_print: bool,
}

impl PrettyFormatter {
    /// Formatter honoring the presentation switches of `config`.
    #[must_use]
    pub const fn new(config: TransportConfig) -> Self {
        Self {
            timestamp: config.timestamp,
            colorize: config.colorize,
            pretty_print: config.pretty_print,
        }
    }
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new(TransportConfig::dev())
    }
}

impl LineFormatter for PrettyFormatter {
    fn format(&self, event: &LogEvent, clock: &dyn Clock) -> String {
        let level = if self.colorize {
            Style::for_color(event.level.color()).paint(event.level.as_str())
        } else {
            event.level.as_str().to_owned()
        };

        let mut line = String::new();
        if self.timestamp {
            line.push_str(&format_timestamp(clock.now()));
            line.push_str(" - ");
        }
        line.push_str(&level);
        line.push_str(": ");
        line.push_str(&event.message);

        if !event.fields.is_empty() {
            if self.pretty_print {
                line.push_str(" \n");
                line.push_str(&inspect_fields(&event.fields, self.colorize));
            } else {
                line.push(' ');
                line.push_str(&inline_fields(&event.fields));
            }
        }
        line
    }
}
