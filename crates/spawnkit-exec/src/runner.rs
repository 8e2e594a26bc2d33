//! Blocking command runner.

use std::io::Read;
use std::path::{Path, PathBuf};

use spawnkit_api::{ProcessBuilder, ProcessHandle};
use spawnkit_common::ProcessError;
use spawnkit_process::OsProcessBuilder;
use thiserror::Error;
use tracing::debug;

/// Result type for runner operations.
pub type RunResult<T> = std::result::Result<T, RunError>;

/// Errors raised while running a command to completion.
#[derive(Error, Debug)]
pub enum RunError {
    /// The command ran but exited with a nonzero code.
    #[error("command {command:?} in {} exited with code {exit_code}: {output}", .directory.display())]
    CommandFailed {
        command: Vec<String>,
        directory: PathBuf,
        exit_code: i32,
        output: String,
    },

    /// Launching or waiting on the process failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Draining the process output failed.
    #[error("failed to read command output: {0}")]
    Output(#[from] std::io::Error),
}

/// What a finished command produced: its exit code and combined output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub output: String,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a command in a working directory and reports its outcome.
///
/// Stderr is merged into the reported output. Inject a fake implementation in
/// tests the same way the underlying builder seam is faked.
pub trait Runner {
    /// Runs the command to completion, whatever its exit code.
    fn run(&self, working_directory: &Path, command: &[String]) -> RunResult<RunOutcome>;

    /// Runs the command and returns its output, failing with
    /// [`RunError::CommandFailed`] on a nonzero exit.
    fn run_success(&self, working_directory: &Path, command: &[String]) -> RunResult<String> {
        let outcome = self.run(working_directory, command)?;
        if !outcome.success() {
            return Err(RunError::CommandFailed {
                command: command.to_vec(),
                directory: working_directory.to_path_buf(),
                exit_code: outcome.exit_code,
                output: outcome.output,
            });
        }
        Ok(outcome.output)
    }
}

/// OS-backed [`Runner`] going through [`OsProcessBuilder`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRunner;

impl Runner for OsRunner {
    fn run(&self, working_directory: &Path, command: &[String]) -> RunResult<RunOutcome> {
        let mut builder = OsProcessBuilder::with_command(command.iter().cloned());
        builder
            .current_dir(Some(working_directory.to_path_buf()))
            .redirect_error_stream(true);

        let mut handle = builder.start()?;

        // The child gets no input; closing stdin up front keeps filters like
        // `cat` from blocking forever. Output must be drained before waiting
        // or a chatty child deadlocks on a full pipe.
        drop(handle.take_stdin());
        let mut output = String::new();
        if let Some(mut stdout) = handle.take_stdout() {
            stdout.read_to_string(&mut output)?;
        }
        let exit_code = handle.wait()?;
        debug!(command = ?command, exit_code, "command finished");

        Ok(RunOutcome { exit_code, output })
    }
}
