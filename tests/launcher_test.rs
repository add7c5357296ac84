//! Integration test: launcher flow
//!
//! Runs the launcher end to end against a temporary directory with scripted
//! stdin, using `sh` as the interpreter so no file needs exec permission.

#![cfg(unix)]

use flappy::config::LauncherConfig;
use flappy::launcher::{self, LaunchOutcome};
use flappy::Error;
use std::ffi::OsStr;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn sh_config() -> LauncherConfig {
    LauncherConfig {
        dir: None,
        extension: Some("sh".to_string()),
        interpreter: Some("sh".to_string()),
    }
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a_ok.sh"), "exit 0\n").unwrap();
    fs::write(dir.path().join("b_fail.sh"), "exit 4\n").unwrap();
    fs::write(dir.path().join("launcher.sh"), "exit 9\n").unwrap();
    fs::write(dir.path().join("readme.txt"), "not a script\n").unwrap();
    dir
}

fn run_with(dir: &TempDir, stdin: &str) -> (flappy::Result<LaunchOutcome>, String) {
    let mut input = Cursor::new(stdin.to_string());
    let mut out = Vec::new();
    let result = launcher::run(
        &sh_config(),
        dir.path(),
        Some(OsStr::new("launcher.sh")),
        &mut input,
        &mut out,
    );
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_menu_lists_candidates_without_self() {
    let dir = setup();
    let (result, out) = run_with(&dir, "0\n");
    assert_eq!(result.unwrap(), LaunchOutcome::Exited);
    assert!(out.contains("1. a_ok.sh"));
    assert!(out.contains("2. b_fail.sh"));
    assert!(!out.contains("launcher.sh"));
    assert!(!out.contains("readme.txt"));
    assert!(out.contains("Exiting..."));
}

#[test]
fn test_successful_child() {
    let dir = setup();
    let (result, out) = run_with(&dir, "1\n");
    assert_eq!(
        result.unwrap(),
        LaunchOutcome::Ran(dir.path().join("a_ok.sh"))
    );
    assert!(out.contains("Running a_ok.sh..."));
}

#[test]
fn test_failing_child_reports_exit_code() {
    let dir = setup();
    let (result, _) = run_with(&dir, "2\n");
    let err = result.unwrap_err();
    assert!(matches!(err, Error::ChildFailed { code: Some(4), .. }));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_invalid_input_reprompts() {
    let dir = setup();
    let (result, out) = run_with(&dir, "x\n5\n-3\n1\n");
    assert!(result.is_ok());
    assert_eq!(out.matches("Invalid input").count(), 1);
    assert_eq!(out.matches("between 0 and 2").count(), 2);
}

#[test]
fn test_closed_stdin_exits() {
    let dir = setup();
    let (result, _) = run_with(&dir, "");
    assert_eq!(result.unwrap(), LaunchOutcome::Exited);
}

#[test]
fn test_no_candidates() {
    let dir = TempDir::new().unwrap();
    let (result, out) = run_with(&dir, "1\n");
    assert_eq!(result.unwrap(), LaunchOutcome::NoCandidates);
    assert!(out.contains("No other programs found"));
}

#[test]
fn test_missing_interpreter_is_spawn_error() {
    let dir = setup();
    let config = LauncherConfig {
        interpreter: Some("definitely-not-an-interpreter-xyz".to_string()),
        ..sh_config()
    };
    let mut input = Cursor::new("1\n".to_string());
    let mut out = Vec::new();
    let err = launcher::run(&config, dir.path(), None, &mut input, &mut out).unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
    assert_eq!(err.exit_code(), 1);
}
