//! Termination signalling for child processes.

use spawnkit_common::{ProcessError, ProcessResult};

/// Asks a process to terminate gracefully (SIGTERM).
///
/// Delivery of the signal is not termination: the process may catch or
/// ignore it, so callers poll liveness or wait afterwards.
pub fn terminate_gracefully(pid: u32) -> ProcessResult<()> {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let nix_pid = Pid::from_raw(pid as i32);
    kill(nix_pid, Signal::SIGTERM).map_err(|e| ProcessError::stop_failed(pid, e.to_string()))
}
