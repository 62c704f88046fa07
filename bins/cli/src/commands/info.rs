//! Info command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use envlog_facade::{
    DEVELOPMENT_ENVIRONMENTS, LEVELS, PRODUCTION_ENVIRONMENTS, facade_crate_version,
};

const BIN_NAME: &str = "envlog";

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let facade_version = facade_crate_version();

    let stdout = if mode.is_json() {
        format_info_json(facade_version)?
    } else {
        format_info_text(facade_version)
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.collect::<Vec<_>>().join(", ")
}

fn format_info_text(facade_version: &str) -> String {
    let levels = join_tags(LEVELS.iter().map(|level| level.as_str()));
    let colors = LEVELS
        .iter()
        .map(|level| format!("{}={}", level, level.color()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "status: ok\nname: {}\nversion: {}\nfacade: {}\ninteractive: {}\nstructured: {}\nlevels: {}\ncolors: {}\n",
        BIN_NAME,
        env!("CARGO_PKG_VERSION"),
        facade_version,
        join_tags(DEVELOPMENT_ENVIRONMENTS.iter().map(|environment| environment.as_str())),
        join_tags(PRODUCTION_ENVIRONMENTS.iter().map(|environment| environment.as_str())),
        levels,
        colors,
    )
}

fn format_info_json(facade_version: &str) -> Result<String, CliError> {
    let levels: Vec<serde_json::Value> = LEVELS
        .iter()
        .map(|level| {
            serde_json::json!({
                "name": level.as_str(),
                "rank": level.rank(),
                "color": level.color(),
            })
        })
        .collect();
    let payload = serde_json::json!({
        "status": "ok",
        "build": {
            "name": BIN_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "facadeVersion": facade_version,
        },
        "environments": {
            "interactive": DEVELOPMENT_ENVIRONMENTS,
            "structured": PRODUCTION_ENVIRONMENTS,
        },
        "levels": levels,
    });
    let mut output = serde_json::to_string_pretty(&payload)?;
    output.push('\n');
    Ok(output)
}
