//! Panic-on-failure adapters over the seam traits.
//!
//! [`UncheckedBuilder`] and [`UncheckedProcess`] wrap a boxed implementation
//! and forward every call verbatim. The one thing they add is a failure
//! translation boundary: `start`, `wait` and `wait_timeout` unwrap their
//! results and panic with the original diagnostic text instead of returning
//! `Err`. Callers that consider a launch or wait failure unrecoverable get
//! plain return values and keep chaining; everything else — no retries, no
//! validation, no caching — is untouched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use spawnkit_common::ProcessResult;

use crate::builder::ProcessBuilder;
use crate::handle::ProcessHandle;

/// Launch configuration whose `start` panics on failure.
///
/// Every setter mutates the wrapped builder and returns `&mut Self`, so
/// chains stay on the adapter type.
pub struct UncheckedBuilder {
    inner: Box<dyn ProcessBuilder>,
}

impl UncheckedBuilder {
    pub fn new(inner: Box<dyn ProcessBuilder>) -> Self {
        Self { inner }
    }

    /// Replaces the whole command line.
    pub fn command(&mut self, command: Vec<String>) -> &mut Self {
        self.inner.command(command);
        self
    }

    /// The current command line.
    pub fn get_command(&self) -> Vec<String> {
        self.inner.get_command()
    }

    /// Sets the working directory; `None` inherits the caller's.
    pub fn current_dir(&mut self, dir: Option<PathBuf>) -> &mut Self {
        self.inner.current_dir(dir);
        self
    }

    /// The configured working directory, if any.
    pub fn get_current_dir(&self) -> Option<PathBuf> {
        self.inner.get_current_dir()
    }

    /// The wrapped builder's live environment map.
    pub fn environment(&mut self) -> &mut HashMap<String, String> {
        self.inner.environment()
    }

    /// Sets the stderr-into-stdout merge flag.
    pub fn redirect_error_stream(&mut self, redirect: bool) -> &mut Self {
        self.inner.redirect_error_stream(redirect);
        self
    }

    /// The current value of the merge flag.
    pub fn get_redirect_error_stream(&self) -> bool {
        self.inner.get_redirect_error_stream()
    }

    /// Launches the configured command.
    ///
    /// # Panics
    ///
    /// Panics with the launch error's diagnostic text if the OS cannot create
    /// the process.
    pub fn start(&mut self) -> UncheckedProcess {
        match self.inner.start() {
            Ok(handle) => UncheckedProcess::new(handle),
            Err(err) => panic!("{err}"),
        }
    }
}

/// Process handle whose blocking waits panic on failure.
pub struct UncheckedProcess {
    inner: Box<dyn ProcessHandle>,
}

impl UncheckedProcess {
    pub fn new(inner: Box<dyn ProcessHandle>) -> Self {
        Self { inner }
    }

    /// Write end connected to the child's stdin; takeable once.
    pub fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        self.inner.take_stdin()
    }

    /// Read end connected to the child's stdout (or merged output); takeable once.
    pub fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        self.inner.take_stdout()
    }

    /// Read end connected to the child's stderr; takeable once.
    pub fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.inner.take_stderr()
    }

    /// Blocks until the child terminates and returns its exit code.
    ///
    /// # Panics
    ///
    /// Panics with the wait error's diagnostic text if the OS wait fails.
    pub fn wait(&mut self) -> i32 {
        match self.inner.wait() {
            Ok(code) => code,
            Err(err) => panic!("{err}"),
        }
    }

    /// Blocks up to `timeout`; returns whether the child terminated within it.
    ///
    /// # Panics
    ///
    /// Panics with the wait error's diagnostic text if the OS wait fails.
    pub fn wait_timeout(&mut self, timeout: Duration) -> bool {
        match self.inner.wait_timeout(timeout) {
            Ok(terminated) => terminated,
            Err(err) => panic!("{err}"),
        }
    }

    /// Non-blocking exit-code query, forwarded without translation: the
    /// still-running state error is returned as `Err` here exactly as on the
    /// wrapped handle.
    pub fn exit_code(&mut self) -> ProcessResult<i32> {
        self.inner.exit_code()
    }

    /// Requests graceful termination (best effort).
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }

    /// Requests forceful termination; returns `&mut Self` so chaining stays
    /// on the unchecked type.
    pub fn destroy_forcibly(&mut self) -> &mut Self {
        self.inner.destroy_forcibly();
        self
    }

    /// Non-blocking liveness check.
    pub fn is_alive(&mut self) -> bool {
        self.inner.is_alive()
    }
}
