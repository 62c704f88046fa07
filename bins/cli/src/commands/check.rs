//! Check command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use crate::options::{OptionArgs, resolve_options};
use envlog_facade::{
    Level, LoggerOptions, StreamRouting, TransportConfig, ValidatedOptions,
};

/// Validate options and report the transport they select.
pub fn run_check(mode: OutputMode, args: &OptionArgs) -> Result<CliOutput, CliError> {
    let options = resolve_options(args)?;
    check_options(mode, &options)
}

fn check_options(mode: OutputMode, options: &LoggerOptions) -> Result<CliOutput, CliError> {
    let validated = options.validate()?;
    let transport = TransportConfig::for_environment(validated.environment);
    let stderr_levels: Vec<Level> = StreamRouting::default().stderr_levels().collect();

    let stdout = if mode.is_json() {
        format_check_json(validated, transport, &stderr_levels)?
    } else {
        format_check_text(validated, transport, &stderr_levels)
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

fn format_check_text(
    validated: ValidatedOptions,
    transport: TransportConfig,
    stderr_levels: &[Level],
) -> String {
    let stderr = stderr_levels
        .iter()
        .map(|level| level.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "status: ok\nenvironment: {}\nclass: {}\nlevel: {}\nformat: {}\ntimestamp: {}\ncolorize: {}\nprettyPrint: {}\nstderr: {}\n",
        validated.environment,
        validated.class(),
        validated.level,
        transport.format,
        transport.timestamp,
        transport.colorize,
        transport.pretty_print,
        stderr,
    )
}

fn format_check_json(
    validated: ValidatedOptions,
    transport: TransportConfig,
    stderr_levels: &[Level],
) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "status": "ok",
        "environment": validated.environment.as_str(),
        "class": validated.class().to_string(),
        "level": validated.level.as_str(),
        "transport": transport,
        "stderrLevels": stderr_levels,
    });
    let mut output = serde_json::to_string_pretty(&payload)?;
    output.push('\n');
    Ok(output)
}
