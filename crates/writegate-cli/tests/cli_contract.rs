//! Contract tests for the writegate binary.
//!
//! Spawn the real executable and assert on the JSON it prints and the exit
//! codes it returns. Verdicts always exit 0; only bad invocations exit
//! non-zero.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn writegate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_writegate"))
        .args(args)
        .output()
        .expect("failed to spawn writegate")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is a single JSON document")
}

fn project_allowing_src() -> TempDir {
    let dir = TempDir::new().unwrap();
    let claude_dir = dir.path().join(".claude");
    fs::create_dir_all(&claude_dir).unwrap();
    fs::write(
        claude_dir.join("security-policy.yaml"),
        "allowed_write_directories:\n  - src\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_check_write_denial_shape() {
    let dir = project_allowing_src();
    let target = dir.path().join("docs/notes.md");
    let output = writegate(&[
        "check-write",
        target.to_str().unwrap(),
        dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["allowed"], false);
    assert_eq!(json["feature_enabled"], true);
    assert!(json["reason"]
        .as_str()
        .unwrap()
        .starts_with("Path outside allowed directories: "));
    assert!(json["resolved_path"].as_str().unwrap().ends_with("docs/notes.md"));
}

#[test]
fn test_check_write_allowed_shape() {
    let dir = project_allowing_src();
    let target = dir.path().join("src/lib.rs");
    let output = writegate(&[
        "check-write",
        target.to_str().unwrap(),
        dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["allowed"], true);
    assert_eq!(json["reason"], "Path is within allowed directory");
}

#[test]
fn test_check_bash_denial_shape() {
    let dir = project_allowing_src();
    let output = writegate(&[
        "check-bash",
        "mkdir -p /etc/evil",
        dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["allowed"], false);
    assert_eq!(json["feature_enabled"], true);
    assert_eq!(json["denied_paths"].as_array().unwrap().len(), 1);
    assert_eq!(json["has_unparseable_writes"], false);
}

#[test]
fn test_check_bash_unconfigured_project() {
    let dir = TempDir::new().unwrap();
    let output = writegate(&[
        "check-bash",
        "mkdir -p /etc/evil",
        dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["allowed"], true);
    assert_eq!(json["feature_enabled"], false);
}

#[test]
fn test_extract_paths_shape() {
    let output = writegate(&["extract-paths", "echo hi > /tmp/x && rsync -a a/ b/"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["paths"], serde_json::json!(["/tmp/x"]));
    assert_eq!(json["has_unparseable_writes"], true);
    assert_eq!(json["unparseable_reasons"], serde_json::json!(["rsync"]));
}

#[test]
fn test_policy_override_flag() {
    let dir = TempDir::new().unwrap();
    let policy = dir.path().join("gate.yaml");
    fs::write(&policy, "allowed_write_directories:\n  - out\n").unwrap();

    let output = writegate(&[
        "check-write",
        dir.path().join("elsewhere.txt").to_str().unwrap(),
        dir.path().to_str().unwrap(),
        "--policy",
        policy.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["allowed"], false);
}

#[test]
fn test_unknown_subcommand_reports_json_error() {
    let output = writegate(&["frobnicate"]);

    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[test]
fn test_missing_argument_reports_json_error() {
    let output = writegate(&["check-write", "/only/one/arg"]);

    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("required"));
}

#[test]
fn test_no_arguments_reports_json_error() {
    let output = writegate(&[]);

    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[test]
fn test_help_prints_and_exits_zero() {
    let output = writegate(&["--help"]);

    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("check-write"));
    assert!(text.contains("check-bash"));
    assert!(text.contains("extract-paths"));
}
