//! End-to-end tests for `envlog emit`.

use serde_json::Value;
use std::io;
use std::process::{Command, Output};

fn envlog(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_envlog"))
        .args(args)
        .env_remove("ENVLOG_ENV")
        .env_remove("ENVLOG_LEVEL")
        .env_remove("ENVLOG_DIAGNOSTICS")
        .output()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn production_info_is_one_json_line_on_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let output = envlog(&[
        "emit",
        "--env",
        "production",
        "--level",
        "debug",
        "--base-meta",
        r#"{"service":"api"}"#,
        "--meta",
        r#"{"requestId":7}"#,
        "served",
    ])?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with('\n'));
    assert!(stdout.starts_with(r#"{"level":"info","message":"served","timestamp":""#));

    let payload: Value = serde_json::from_str(stdout.trim())?;
    assert_eq!(payload["service"], "api");
    assert_eq!(payload["requestId"], 7);
    assert!(stderr_of(&output).is_empty());
    Ok(())
}

#[test]
fn development_debug_is_pretty_on_stderr() -> io::Result<()> {
    let output = envlog(&[
        "emit",
        "--env",
        "development",
        "--level",
        "debug",
        "--severity",
        "debug",
        "hello",
    ])?;
    assert!(output.status.success());

    let stderr = stderr_of(&output);
    assert!(stderr.ends_with(" - \u{1b}[34mdebug\u{1b}[39m: hello\n"), "{stderr:?}");
    assert!(stdout_of(&output).is_empty());
    Ok(())
}

#[test]
fn events_below_threshold_write_nothing() -> io::Result<()> {
    let output = envlog(&["emit", "--env", "stage", "--severity", "debug", "quiet"])?;
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).is_empty());
    Ok(())
}

#[test]
fn environment_variables_supply_defaults() -> io::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_envlog"))
        .args(["emit", "--severity", "warn", "from env"])
        .env("ENVLOG_ENV", "stage")
        .env("ENVLOG_LEVEL", "warn")
        .env_remove("ENVLOG_DIAGNOSTICS")
        .output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with(r#"{"level":"warn","message":"from env""#));
    Ok(())
}

#[test]
fn unknown_level_exits_with_invalid_input() -> io::Result<()> {
    let output = envlog(&["emit", "--env", "development", "--level", "wrong", "hello"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr_of(&output),
        "error: logger:invalid_level: Log Level 'wrong' is not available\n"
    );
    Ok(())
}

#[test]
fn unknown_environment_names_the_environment() -> io::Result<()> {
    let output = envlog(&["emit", "--env", "qa", "--level", "info", "hello"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Environment 'qa' is not available"));
    Ok(())
}
