//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod options;

use clap::{Parser, Subcommand};
use commands::{EmitInput, run_check, run_emit, run_info};
use envlog_facade::{StderrLogSink, StdoutLogSink};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use options::OptionArgs;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Env var holding the filter for the CLI's own diagnostics.
const DIAGNOSTICS_ENV: &str = "ENVLOG_DIAGNOSTICS";

#[derive(Debug, Parser)]
#[command(
    name = "envlog",
    version,
    about = "Environment-aware structured logging",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show version and the level and environment tables.
    Info,
    /// Validate options and show the transport they select.
    Check {
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Emit one event through the logger.
    Emit {
        #[command(flatten)]
        options: OptionArgs,
        /// Severity of the event.
        #[arg(long, default_value = "info")]
        severity: String,
        /// Call-site metadata as a JSON object.
        #[arg(long)]
        meta: Option<String>,
        /// Base metadata as a JSON object.
        #[arg(long)]
        base_meta: Option<String>,
        /// Message text.
        message: String,
    },
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    init_diagnostics();
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);

    match run(cli.command, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn init_diagnostics() {
    let filter =
        EnvFilter::try_from_env(DIAGNOSTICS_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: Commands, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        Commands::Info => run_info(mode),
        Commands::Check { options } => run_check(mode, &options),
        Commands::Emit {
            options,
            severity,
            meta,
            base_meta,
            message,
        } => run_emit(
            &EmitInput {
                options,
                severity,
                meta,
                base_meta,
                message,
            },
            Arc::new(StdoutLogSink),
            Arc::new(StderrLogSink),
        ),
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
