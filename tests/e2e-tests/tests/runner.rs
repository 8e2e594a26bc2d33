//! Run-to-completion execution through the runner layer.

mod common;

use common::testexe_command;
use spawnkit_exec::{OsRunner, RunError, Runner};

#[test]
fn run_reports_exit_code_and_merged_output() {
    let dir = tempfile::tempdir().unwrap();
    let command = testexe_command(&[
        "--stdout", "to out", "--stderr", "to err", "--exit-code", "2",
    ]);

    let outcome = OsRunner.run(dir.path(), &command).unwrap();
    assert_eq!(outcome.exit_code, 2);
    assert!(!outcome.success());
    assert!(outcome.output.contains("to out"));
    assert!(outcome.output.contains("to err"));
}

#[test]
fn run_success_returns_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let command = testexe_command(&["--stdout", "all good"]);

    let output = OsRunner.run_success(dir.path(), &command).unwrap();
    assert_eq!(output, "all good\n");
}

#[test]
fn run_success_fails_on_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let command = testexe_command(&["--stdout", "boom", "--exit-code", "3"]);

    match OsRunner.run_success(dir.path(), &command) {
        Err(RunError::CommandFailed {
            exit_code, output, ..
        }) => {
            assert_eq!(exit_code, 3);
            assert!(output.contains("boom"));
        }
        Ok(_) => panic!("expected a command failure"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn run_uses_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    let command = testexe_command(&["--print-cwd"]);

    let output = OsRunner.run_success(&canonical, &command).unwrap();
    assert_eq!(
        std::path::PathBuf::from(output.trim_end()),
        canonical
    );
}
