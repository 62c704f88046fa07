//! Line formatting contract (the transport profile's presentation half).

use crate::clock::Clock;
use crate::logger::LogEvent;

/// Turns an event into one output record, without the trailing newline.
///
/// The clock is handed to the formatter so that profiles without a
/// timestamp never read it.
pub trait LineFormatter: Send + Sync {
    /// Render `event`.
    fn format(&self, event: &LogEvent, clock: &dyn Clock) -> String;
}
