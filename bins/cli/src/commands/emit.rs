//! Emit command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::options::{OptionArgs, resolve_options};
use envlog_facade::{Level, LogFields, LogSink, Logger, LoggerOptions};
use serde_json::Value;
use std::sync::Arc;

/// Parsed `emit` arguments.
#[derive(Debug, Clone)]
pub struct EmitInput {
    pub options: OptionArgs,
    pub severity: String,
    pub meta: Option<String>,
    pub base_meta: Option<String>,
    pub message: String,
}

/// Run the emit command against the given sinks.
pub fn run_emit(
    input: &EmitInput,
    stdout: Arc<dyn LogSink>,
    stderr: Arc<dyn LogSink>,
) -> Result<CliOutput, CliError> {
    let options = resolve_options(&input.options)?;
    emit_with_options(input, &options, stdout, stderr)
}

fn emit_with_options(
    input: &EmitInput,
    options: &LoggerOptions,
    stdout: Arc<dyn LogSink>,
    stderr: Arc<dyn LogSink>,
) -> Result<CliOutput, CliError> {
    let severity: Level = input
        .severity
        .parse()
        .map_err(|error| CliError::InvalidInput(format!("{error}")))?;
    let base_fields = parse_fields("--base-meta", input.base_meta.as_deref())?;
    let call_fields = parse_fields("--meta", input.meta.as_deref())?;

    let logger = Logger::builder(options.clone())
        .with_base_fields(base_fields)
        .with_sinks(stdout, stderr)
        .build()?;
    tracing::debug!(%severity, enabled = logger.enabled(severity), "emitting event");
    logger.log(severity, &input.message, call_fields);

    Ok(CliOutput {
        stdout: String::new(),
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

fn parse_fields(flag: &str, input: Option<&str>) -> Result<LogFields, CliError> {
    let Some(input) = input else {
        return Ok(LogFields::new());
    };
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CliError::InvalidInput(format!(
            "{flag} must be a JSON object"
        ))),
        Err(error) => Err(CliError::InvalidInput(format!(
            "{flag} is not valid JSON: {error}"
        ))),
    }
}
