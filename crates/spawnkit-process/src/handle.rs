//! Process handle backed by `std::process::Child`.

use std::io::{self, Read, Write};
use std::process::{Child, ExitStatus};
use std::time::Duration;

use spawnkit_api::ProcessHandle;
use spawnkit_common::{ProcessError, ProcessResult};
use tracing::warn;
use wait_timeout::ChildExt;

/// Handle to a spawned OS process.
///
/// Wraps the child plus, when stderr was merged at launch, the read end of
/// the shared output pipe and an empty stand-in for the stderr stream.
#[derive(Debug)]
pub struct OsProcess {
    child: Child,
    merged_stdout: Option<io::PipeReader>,
    empty_stderr: Option<io::Empty>,
}

impl OsProcess {
    pub(crate) fn new(child: Child, merged_stdout: Option<io::PipeReader>) -> Self {
        let empty_stderr = merged_stdout.as_ref().map(|_| io::empty());
        Self {
            child,
            merged_stdout,
            empty_stderr,
        }
    }
}

/// Maps an exit status to the integer the handle reports. Signal deaths on
/// Unix follow the shell convention of `128 + signo`.
fn status_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.code().is_none() {
            if let Some(signal) = status.signal() {
                return 128 + signal;
            }
        }
    }
    status.code().unwrap_or(-1)
}

impl ProcessHandle for OsProcess {
    fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        self.child
            .stdin
            .take()
            .map(|stdin| Box::new(stdin) as Box<dyn Write + Send>)
    }

    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        if let Some(reader) = self.merged_stdout.take() {
            return Some(Box::new(reader));
        }
        self.child
            .stdout
            .take()
            .map(|stdout| Box::new(stdout) as Box<dyn Read + Send>)
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        if let Some(empty) = self.empty_stderr.take() {
            return Some(Box::new(empty));
        }
        self.child
            .stderr
            .take()
            .map(|stderr| Box::new(stderr) as Box<dyn Read + Send>)
    }

    fn wait(&mut self) -> ProcessResult<i32> {
        let status = self
            .child
            .wait()
            .map_err(|e| ProcessError::wait_failed(e.to_string()))?;
        Ok(status_code(status))
    }

    fn wait_timeout(&mut self, timeout: Duration) -> ProcessResult<bool> {
        match self.child.wait_timeout(timeout) {
            Ok(Some(_)) => Ok(true),
            Ok(None) => Ok(false),
            Err(e) => Err(ProcessError::wait_failed(e.to_string())),
        }
    }

    fn exit_code(&mut self) -> ProcessResult<i32> {
        match self.child.try_wait() {
            Ok(Some(status)) => Ok(status_code(status)),
            Ok(None) => Err(ProcessError::StillRunning),
            Err(e) => Err(ProcessError::wait_failed(e.to_string())),
        }
    }

    fn destroy(&mut self) {
        // Signalling a reaped pid could hit an unrelated process.
        if !matches!(self.child.try_wait(), Ok(None)) {
            return;
        }

        #[cfg(unix)]
        {
            if let Err(err) = crate::terminate::terminate_gracefully(self.child.id()) {
                warn!(pid = self.child.id(), %err, "graceful termination signal failed");
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(err) = self.child.kill() {
                warn!(pid = self.child.id(), %err, "termination failed");
            }
        }
    }

    fn destroy_forcibly(&mut self) -> &mut dyn ProcessHandle {
        if matches!(self.child.try_wait(), Ok(None)) {
            if let Err(err) = self.child.kill() {
                warn!(pid = self.child.id(), %err, "forceful kill failed");
            }
        }
        self
    }

    fn is_alive(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}
