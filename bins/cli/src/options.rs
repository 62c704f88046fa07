//! Logger option flags shared by commands.

use crate::error::CliError;
use clap::Args;
use envlog_facade::{ErrorEnvelope, LoggerEnv, LoggerOptions, load_options_from_path};
use std::path::PathBuf;

/// Flags selecting the environment and level.
///
/// Precedence: flags, then `ENVLOG_ENV` / `ENVLOG_LEVEL`, then the config
/// file, then `development` / `info`.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionArgs {
    /// Environment (`development`, `test`, `stage`, `production`).
    #[arg(long)]
    pub env: Option<String>,
    /// Minimum level (`test`, `error`, `warn`, `info`, `debug`).
    #[arg(long)]
    pub level: Option<String>,
    /// Optional options file (JSON or TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve options from the process environment and `args`.
pub fn resolve_options(args: &OptionArgs) -> Result<LoggerOptions, CliError> {
    let env = LoggerEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    resolve_options_with_env(args, env)
}

/// Resolve options from an explicit environment snapshot and `args`.
pub fn resolve_options_with_env(
    args: &OptionArgs,
    mut env: LoggerEnv,
) -> Result<LoggerOptions, CliError> {
    if let Some(value) = &args.env {
        env.env = Some(value.clone());
    }
    if let Some(value) = &args.level {
        env.level = Some(value.clone());
    }
    Ok(load_options_from_path(args.config.as_deref(), &env)?)
}
