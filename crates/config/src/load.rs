//! Option loading helpers (env + file + defaults).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s. It does not validate the
//! tags; that happens when a logger is built.

use crate::env::LoggerEnv;
use crate::options::{DEFAULT_ENVIRONMENT, DEFAULT_LEVEL, LoggerOptions};
use envlog_shared::{ErrorCode, ErrorEnvelope};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Partial options as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct LoggerOptionsFile {
    #[serde(alias = "environment")]
    env: Option<String>,
    level: Option<String>,
}

/// Resolve options from an optional JSON or TOML file plus env overrides.
///
/// Precedence (highest wins):
/// - env overrides (`LoggerEnv`)
/// - config file content
/// - defaults (`development` / `info`)
pub fn load_options_from_path(
    config_path: Option<&Path>,
    env: &LoggerEnv,
) -> Result<LoggerOptions, ErrorEnvelope> {
    let file = match config_path {
        None => LoggerOptionsFile::default(),
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            tracing::debug!(path = %path.display(), ?format, "loading logger options file");
            parse_options_file(&config_text, format)?
        },
    };
    Ok(resolve(file, env))
}

fn resolve(file: LoggerOptionsFile, env: &LoggerEnv) -> LoggerOptions {
    let env_tag = env
        .env
        .clone()
        .or(file.env)
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
    let level = env
        .level
        .clone()
        .or(file.level)
        .unwrap_or_else(|| DEFAULT_LEVEL.to_owned());

    tracing::debug!(env = %env_tag, level = %level, "resolved logger options");
    LoggerOptions::new(env_tag, level)
}

fn parse_options_file(
    input: &str,
    format: ConfigFormat,
) -> Result<LoggerOptionsFile, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}
