//! Integration tests for launcher orchestration:
//! build → register version → execute → exit intent.
//!
//! Collaborators are substituted with closures and capturing sinks, so exit
//! intents are asserted without terminating any process.

use std::sync::{Arc, Mutex};

use clap::Command;

use confgen::cli::output::OutputSinks;
use confgen::cli::root::{build_root_cmd, RootCmd};
use confgen::cli::{run, CliError, CommandSpec};
use confgen::exitcode;
use confgen::util::testing;

type Captured = Arc<Mutex<Vec<String>>>;

/// Sinks that record lines instead of touching stdio.
fn capture_sinks() -> (OutputSinks, Captured, Captured) {
    let info: Captured = Arc::new(Mutex::new(Vec::new()));
    let fatal: Captured = Arc::new(Mutex::new(Vec::new()));
    let info_lines = info.clone();
    let fatal_lines = fatal.clone();
    let sinks = OutputSinks::new(
        Arc::new(move |msg: &str| info_lines.lock().unwrap().push(msg.to_string())),
        Arc::new(move |msg: &str| fatal_lines.lock().unwrap().push(msg.to_string())),
    );
    (sinks, info, fatal)
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn joined(lines: &Captured) -> String {
    lines.lock().unwrap().join("\n")
}

#[test]
fn given_succeeding_runner_when_run_then_exit_ok() {
    testing::init_test_setup();
    let (sinks, info, _fatal) = capture_sinks();

    let builder = |args: Vec<String>, sinks: OutputSinks| {
        let mut root = RootCmd::new(args, sinks);
        root.add_command(CommandSpec::new(Command::new("apply"), |_, _, sinks| {
            sinks.info("applied");
            Ok(())
        }));
        root
    };

    let code = run(builder, args(&["apply"]), sinks);

    assert_eq!(code, exitcode::OK);
    assert!(joined(&info).contains("applied"));
}

#[test]
fn given_failing_runner_when_run_then_exit_failure_and_error_surfaced() {
    let (sinks, _info, fatal) = capture_sinks();

    let builder = |args: Vec<String>, sinks: OutputSinks| {
        let mut root = RootCmd::new(args, sinks);
        root.add_command(CommandSpec::new(Command::new("apply"), |_, _, _| {
            Err(CliError::Command("generation failed".into()))
        }));
        root
    };

    let code = run(builder, args(&["apply"]), sinks);

    assert_eq!(code, exitcode::FAILURE);
    assert_ne!(code, exitcode::OK);
    assert!(joined(&fatal).contains("generation failed"));
}

#[test]
fn given_empty_args_when_run_then_help_and_exit_ok() {
    let (sinks, info, fatal) = capture_sinks();

    let code = run(build_root_cmd, args(&[]), sinks);

    assert_eq!(code, exitcode::OK);
    assert!(joined(&info).contains("Usage:"));
    assert!(fatal.lock().unwrap().is_empty());
}

#[test]
fn given_version_args_when_run_then_version_reported_and_exit_ok() {
    let (sinks, info, _fatal) = capture_sinks();

    let code = run(build_root_cmd, args(&["version"]), sinks);

    assert_eq!(code, exitcode::OK);
    assert!(joined(&info).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn given_short_flag_when_version_runs_then_bare_version() {
    let (sinks, info, _fatal) = capture_sinks();

    let code = run(build_root_cmd, args(&["version", "--short"]), sinks);

    assert_eq!(code, exitcode::OK);
    assert!(info
        .lock()
        .unwrap()
        .iter()
        .any(|line| line == env!("CARGO_PKG_VERSION")));
}

#[test]
fn given_unknown_subcommand_when_run_then_exit_failure() {
    let (sinks, _info, fatal) = capture_sinks();

    let code = run(build_root_cmd, args(&["frobnicate"]), sinks);

    assert_eq!(code, exitcode::FAILURE);
    assert!(joined(&fatal).contains("frobnicate"));
}

#[test]
fn given_help_flag_when_run_then_exit_ok() {
    let (sinks, info, _fatal) = capture_sinks();

    let code = run(build_root_cmd, args(&["--help"]), sinks);

    assert_eq!(code, exitcode::OK);
    assert!(joined(&info).contains("Usage:"));
}

#[test]
fn given_version_flag_when_run_then_exit_ok() {
    let (sinks, info, _fatal) = capture_sinks();

    let code = run(build_root_cmd, args(&["--version"]), sinks);

    assert_eq!(code, exitcode::OK);
    assert!(joined(&info).contains(env!("CARGO_PKG_VERSION")));
}
