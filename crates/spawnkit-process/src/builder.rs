//! Launch configuration backed by `std::process::Command`.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use spawnkit_api::{ProcessBuilder, ProcessHandle, UncheckedBuilder};
use spawnkit_common::{ProcessError, ProcessResult};
use tracing::debug;

use crate::handle::OsProcess;

/// OS-backed launch configuration.
///
/// Holds the command line, optional working directory, the environment map
/// for the next start (initialised from the parent's environment) and the
/// stderr merge flag. Each `start` snapshots the current configuration and
/// spawns an independent child; the builder can be mutated and started again.
#[derive(Debug, Clone)]
pub struct OsProcessBuilder {
    command: Vec<String>,
    current_dir: Option<PathBuf>,
    environment: HashMap<String, String>,
    redirect_error_stream: bool,
}

impl OsProcessBuilder {
    /// Creates a builder with an empty command line and the parent's
    /// environment.
    pub fn new() -> Self {
        Self {
            command: Vec::new(),
            current_dir: None,
            environment: std::env::vars().collect(),
            redirect_error_stream: false,
        }
    }

    /// Creates a builder with the given command line.
    pub fn with_command<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        builder.command = command.into_iter().map(Into::into).collect();
        builder
    }

    /// Wraps this builder in the panic-on-failure adapter.
    pub fn unchecked(self) -> UncheckedBuilder {
        UncheckedBuilder::new(Box::new(self))
    }
}

impl Default for OsProcessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessBuilder for OsProcessBuilder {
    fn command(&mut self, command: Vec<String>) -> &mut dyn ProcessBuilder {
        self.command = command;
        self
    }

    fn get_command(&self) -> Vec<String> {
        self.command.clone()
    }

    fn current_dir(&mut self, dir: Option<PathBuf>) -> &mut dyn ProcessBuilder {
        self.current_dir = dir;
        self
    }

    fn get_current_dir(&self) -> Option<PathBuf> {
        self.current_dir.clone()
    }

    fn environment(&mut self) -> &mut HashMap<String, String> {
        &mut self.environment
    }

    fn redirect_error_stream(&mut self, redirect: bool) -> &mut dyn ProcessBuilder {
        self.redirect_error_stream = redirect;
        self
    }

    fn get_redirect_error_stream(&self) -> bool {
        self.redirect_error_stream
    }

    fn start(&mut self) -> ProcessResult<Box<dyn ProcessHandle>> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| ProcessError::configuration("command line is empty"))?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.env_clear();
        cmd.envs(&self.environment);
        cmd.stdin(Stdio::piped());

        // Merging rewires both child descriptors onto one anonymous pipe; the
        // parent keeps the read end as the handle's stdout.
        let mut merged_stdout = None;
        if self.redirect_error_stream {
            let (reader, writer) =
                io::pipe().map_err(|e| ProcessError::spawn_failed(program, e.to_string()))?;
            let writer_clone = writer
                .try_clone()
                .map_err(|e| ProcessError::spawn_failed(program, e.to_string()))?;
            cmd.stdout(Stdio::from(writer));
            cmd.stderr(Stdio::from(writer_clone));
            merged_stdout = Some(reader);
        } else {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        }

        let child = cmd
            .spawn()
            .map_err(|e| ProcessError::spawn_failed(program, e.to_string()))?;
        debug!(program = %program, pid = child.id(), "spawned child process");

        Ok(Box::new(OsProcess::new(child, merged_stdout)))
    }
}
