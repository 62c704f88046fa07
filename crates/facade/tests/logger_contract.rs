//! Integration coverage for the public logger API.

use chrono::{TimeZone, Utc};
use envlog_facade::{
    ENVIRONMENTS, Environment, FixedClock, LEVELS, Level, LogFields, Logger, LoggerOptions,
    MemoryLogSink, StreamRouting, TransportFormat, fields, timestamp_value,
};
use serde_json::{Value, json};
use std::error::Error;
use std::sync::Arc;

struct Streams {
    stdout: Arc<MemoryLogSink>,
    stderr: Arc<MemoryLogSink>,
}

impl Streams {
    fn new() -> Self {
        Self {
            stdout: Arc::new(MemoryLogSink::new()),
            stderr: Arc::new(MemoryLogSink::new()),
        }
    }

    fn logger(&self, env: &str, level: &str, base: LogFields) -> Result<Logger, Box<dyn Error>> {
        let Some(at) = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).single() else {
            return Err("invalid fixed date".into());
        };
        Ok(Logger::builder(LoggerOptions::new(env, level))
            .with_base_fields(base)
            .with_clock(Arc::new(FixedClock::new(at)))
            .with_sinks(self.stdout.clone(), self.stderr.clone())
            .build()?)
    }

    fn total(&self) -> usize {
        self.stdout.len() + self.stderr.len()
    }
}

#[test]
fn every_environment_and_level_pair_constructs() -> Result<(), Box<dyn Error>> {
    for environment in ENVIRONMENTS {
        for level in LEVELS {
            let logger = Logger::new(
                &LoggerOptions::new(environment.as_str(), level.as_str()),
                LogFields::new(),
            )?;
            let expected = if environment.is_production_class() {
                TransportFormat::Json
            } else {
                TransportFormat::Pretty
            };
            assert_eq!(logger.transport().format, expected);
            assert_eq!(logger.level(), level);
        }
    }
    Ok(())
}

#[test]
fn threshold_follows_rank_order() -> Result<(), Box<dyn Error>> {
    for threshold in LEVELS {
        let streams = Streams::new();
        let logger = streams.logger("production", threshold.as_str(), LogFields::new())?;
        for level in LEVELS {
            logger.log(level, "probe", LogFields::new());
        }
        let expected = LEVELS
            .iter()
            .filter(|level| level.rank() <= threshold.rank())
            .count();
        assert_eq!(streams.total(), expected, "threshold {threshold}");
    }
    Ok(())
}

#[test]
fn json_lines_flatten_merged_metadata() -> Result<(), Box<dyn Error>> {
    let streams = Streams::new();
    let Some(created) = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single() else {
        return Err("invalid date".into());
    };
    let logger = streams.logger(
        "stage",
        "info",
        fields([("service", json!("billing")), ("createdAt", timestamp_value(created))]),
    )?;
    logger.warn("retrying", fields([("attempt", json!(2))]));

    let lines = streams.stdout.take();
    assert_eq!(
        lines,
        vec![
            "{\"level\":\"warn\",\"message\":\"retrying\",\"timestamp\":\"2021-03-04T05:06:07.000Z\",\"service\":\"billing\",\"createdAt\":\"2020-01-01T00:00:00.000Z\",\"attempt\":2}\n"
                .to_string()
        ]
    );
    let payload: Value = serde_json::from_str(lines.concat().trim())?;
    assert_eq!(payload.get("attempt"), Some(&json!(2)));
    Ok(())
}

#[test]
fn call_metadata_does_not_leak_between_calls() -> Result<(), Box<dyn Error>> {
    let streams = Streams::new();
    let logger = streams.logger("production", "info", fields([("a", json!(1))]))?;
    logger.info("first", fields([("a", json!(2)), ("b", json!(3))]));
    logger.info_message("second");

    let lines = streams.stdout.take();
    assert_eq!(lines.len(), 2);
    let second: Value = serde_json::from_str(lines.get(1).map_or("", String::as_str).trim())?;
    assert_eq!(second.get("a"), Some(&json!(1)));
    assert_eq!(second.get("b"), None);
    Ok(())
}

#[test]
fn routing_can_send_everything_to_stderr() -> Result<(), Box<dyn Error>> {
    let streams = Streams::new();
    let Some(at) = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).single() else {
        return Err("invalid fixed date".into());
    };
    let logger = Logger::builder(LoggerOptions::new("development", "debug"))
        .with_routing(StreamRouting::with_stderr_levels(LEVELS))
        .with_clock(Arc::new(FixedClock::new(at)))
        .with_sinks(streams.stdout.clone(), streams.stderr.clone())
        .build()?;
    logger.info_message("one");
    logger.test_message("two");

    assert!(streams.stdout.is_empty());
    assert_eq!(streams.stderr.len(), 2);
    Ok(())
}

#[test]
fn pretty_output_breaks_long_metadata() -> Result<(), Box<dyn Error>> {
    let streams = Streams::new();
    let logger = streams.logger("test", "test", LogFields::new())?;
    logger.test(
        "wide",
        fields([
            ("first", json!("aaaaaaaaaaaaaaaaaaaa")),
            ("second", json!("bbbbbbbbbbbbbbbbbbbb")),
            ("third", json!("cccccccccccccccccccc")),
        ]),
    );

    let lines = streams.stdout.take();
    let line = lines.concat();
    assert!(line.starts_with("2021-03-04T05:06:07.000Z - \u{1b}[36mtest\u{1b}[39m: wide \n{ first: "));
    assert!(line.contains(",\n  second: "));
    assert!(line.ends_with(" }\n"));
    Ok(())
}

#[test]
fn environment_tags_round_trip() {
    for environment in ENVIRONMENTS {
        assert_eq!(environment.as_str().parse::<Environment>().ok(), Some(environment));
    }
    assert_eq!("debug".parse::<Level>().ok(), Some(Level::Debug));
}
