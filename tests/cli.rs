//! CLI tests for the `cmake-starter` binary
//!
//! Only paths that never reach the network are exercised here.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    // Point at a config file that does not exist so the user's own is ignored
    let config = cwd.join("no-config.toml");
    Command::new(env!("CARGO_BIN_EXE_cmake-starter"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute cmake-starter")
}

#[test]
fn test_help_lists_options() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--gcc-version"));
    assert!(stdout.contains("PROJECT_NAME") || stdout.contains("project_name"));
}

#[test]
fn test_project_name_is_required() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &[]);
    assert!(!output.status.success());
}

#[test]
fn test_dry_run_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["My Project", "--gcc-version", "13", "--dry-run"]);

    assert!(
        output.status.success(),
        "Dry run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DRY RUN"));
    assert!(stdout.contains("my-project"));
    assert!(stdout.contains("my_project"));
    assert!(stdout.contains("-DCMAKE_C_COMPILER=gcc-13"));
    assert!(stdout.contains("-DCMAKE_CXX_COMPILER=g++-13"));
    assert!(!dir.path().join("my-project").exists());
}

#[test]
fn test_existing_directory_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sample-app")).unwrap();

    let output = run_cli(dir.path(), &["Sample_App"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
    assert!(!dir.path().join("sample-app").join(".git").exists());
}

#[test]
fn test_config_supplies_gcc_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("starter.toml");
    fs::write(&config, "[toolchain]\ngcc_version = \"12\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cmake-starter"))
        .args(["demo", "--dry-run", "--config"])
        .arg(&config)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gcc-12"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("starter.toml");
    fs::write(&config, "[toolchain\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cmake-starter"))
        .args(["demo", "--dry-run", "--config"])
        .arg(&config)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse"));
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_cmake-starter"))
        .args(["--completions", "bash"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("cmake-starter"));
}
