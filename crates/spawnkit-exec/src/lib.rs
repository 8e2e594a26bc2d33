//! # Spawnkit Exec
//!
//! Run-to-completion command execution built on the spawnkit seam.
//!
//! For callers that just want "run this command in that directory and give me
//! its output and exit code", [`Runner`] wraps the builder/handle choreography:
//! merged error stream, drained output, blocking wait. [`OsRunner`] is the
//! OS-backed implementation.

pub mod runner;

pub use runner::{OsRunner, RunError, RunOutcome, RunResult, Runner};
