//! End-to-end tests for `envlog check` and `envlog info`.

use serde_json::Value;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

fn envlog(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_envlog"))
        .args(args)
        .env_remove("ENVLOG_ENV")
        .env_remove("ENVLOG_LEVEL")
        .env_remove("ENVLOG_DIAGNOSTICS")
        .output()
}

fn temp_config(name: &str, contents: &str) -> io::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("envlog-e2e-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn check_defaults_to_development_info() -> io::Result<()> {
    let output = envlog(&["check"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("environment: development\n"));
    assert!(stdout.contains("level: info\n"));
    assert!(stdout.contains("format: pretty\n"));
    Ok(())
}

#[test]
fn check_reads_toml_config_and_flags_win() -> Result<(), Box<dyn std::error::Error>> {
    let path = temp_config("options.toml", "env = \"stage\"\nlevel = \"error\"\n")?;
    let path_arg = path.to_string_lossy().to_string();
    let output = envlog(&["check", "--config", &path_arg, "--level", "warn", "--output", "json"])?;
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["environment"], "stage");
    assert_eq!(payload["level"], "warn");
    assert_eq!(payload["transport"]["format"], "json");
    Ok(())
}

#[test]
fn check_rejects_unknown_config_fields() -> io::Result<()> {
    let path = temp_config("bad.json", r#"{"env":"stage","colour":true}"#)?;
    let path_arg = path.to_string_lossy().to_string();
    let output = envlog(&["check", "--config", &path_arg])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: config:invalid_json"));
    Ok(())
}

#[test]
fn check_missing_config_is_io_error() -> io::Result<()> {
    let output = envlog(&["check", "--config", "/nonexistent/envlog.json"])?;
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn info_is_deterministic() -> io::Result<()> {
    let first = envlog(&["info", "--output", "json"])?;
    let second = envlog(&["info", "--output", "json"])?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout, "info output should be deterministic");
    Ok(())
}
