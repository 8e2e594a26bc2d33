//! Running process handle trait.

use std::io::{Read, Write};
use std::time::Duration;

use spawnkit_common::ProcessResult;

/// Handle to a started child process: its standard streams, exit status and
/// lifecycle controls.
///
/// The handle introduces no threads, timers or callbacks of its own. `wait`
/// and `wait_timeout` block only the calling thread; `destroy` and
/// `destroy_forcibly` are best-effort requests that return before termination
/// is confirmed, so liveness has to be polled or awaited separately. Closing
/// the taken streams is the caller's responsibility.
pub trait ProcessHandle: Send {
    /// Write end connected to the child's stdin. Returns `None` once taken
    /// (or when stdin was not piped).
    fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>>;

    /// Read end connected to the child's stdout — or to the merged
    /// stdout+stderr if the merge flag was set at launch. Returns `None` once
    /// taken.
    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>>;

    /// Read end connected to the child's stderr. When streams were merged at
    /// launch this yields a reader that produces nothing. Returns `None` once
    /// taken.
    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>>;

    /// Blocks the calling thread until the child terminates and returns its
    /// exit code. On Unix a signal death is reported as `128 + signo`.
    fn wait(&mut self) -> ProcessResult<i32>;

    /// Blocks up to `timeout`; returns whether the child terminated within it.
    fn wait_timeout(&mut self, timeout: Duration) -> ProcessResult<bool>;

    /// Non-blocking exit-code query. Fails with
    /// [`ProcessError::StillRunning`](spawnkit_common::ProcessError::StillRunning)
    /// while the child is alive.
    fn exit_code(&mut self) -> ProcessResult<i32>;

    /// Requests graceful termination. Best effort: failures are logged, not
    /// returned, and the child may outlive the call.
    fn destroy(&mut self);

    /// Requests forceful termination. Returns the handle so lifecycle calls
    /// can chain, e.g. `handle.destroy_forcibly().wait()`.
    fn destroy_forcibly(&mut self) -> &mut dyn ProcessHandle;

    /// Non-blocking liveness check.
    fn is_alive(&mut self) -> bool;
}
