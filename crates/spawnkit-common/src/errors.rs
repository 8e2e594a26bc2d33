//! Error types for process launching and control.

use thiserror::Error;

/// Result type for process operations.
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

/// Errors raised while launching or controlling a child process.
///
/// Variants carry the operating system's diagnostic text as plain strings so
/// the error stays `Clone` and the message survives any later conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// The OS could not create the process (bad executable, permissions,
    /// resource limits).
    #[error("Process spawn failed: {program} - {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The OS wait primitive failed while blocking on a child.
    #[error("Wait for process failed: {reason}")]
    WaitFailed { reason: String },

    /// A non-blocking exit-code query was made before the process terminated.
    #[error("Process has not terminated")]
    StillRunning,

    /// Sending a termination signal to the process failed.
    #[error("Process stop failed: {pid} - {reason}")]
    StopFailed { pid: u32, reason: String },

    /// The launch configuration is unusable (e.g. an empty command line).
    #[error("Process configuration error: {reason}")]
    Configuration { reason: String },
}

impl ProcessError {
    pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn wait_failed(reason: impl Into<String>) -> Self {
        Self::WaitFailed {
            reason: reason.into(),
        }
    }

    pub fn stop_failed(pid: u32, reason: impl Into<String>) -> Self {
        Self::StopFailed {
            pid,
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
