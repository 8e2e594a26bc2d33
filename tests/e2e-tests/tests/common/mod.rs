//! Shared helpers for the end-to-end suites.

#![allow(dead_code)]

use spawnkit_process::OsProcessBuilder;

/// Path of the fixture binary, built by cargo alongside these tests.
pub const TESTEXE: &str = env!("CARGO_BIN_EXE_testexe");

/// Builder preconfigured to launch the fixture with the given flags.
pub fn testexe(args: &[&str]) -> OsProcessBuilder {
    let mut command = vec![TESTEXE.to_string()];
    command.extend(args.iter().map(|arg| arg.to_string()));
    OsProcessBuilder::with_command(command)
}

/// Command line launching the fixture with the given flags.
pub fn testexe_command(args: &[&str]) -> Vec<String> {
    let mut command = vec![TESTEXE.to_string()];
    command.extend(args.iter().map(|arg| arg.to_string()));
    command
}
