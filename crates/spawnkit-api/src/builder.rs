//! Launch configuration trait.

use std::collections::HashMap;
use std::path::PathBuf;

use spawnkit_common::ProcessResult;

use crate::handle::ProcessHandle;

/// Mutable configuration describing how to start a child process.
///
/// The trait is object safe so implementations can be consumed as
/// `Box<dyn ProcessBuilder>`. Setters return `&mut dyn ProcessBuilder`, which
/// keeps call chains working through trait objects:
///
/// ```ignore
/// builder
///     .command(vec!["ls".into(), "-l".into()])
///     .redirect_error_stream(true)
///     .start()?;
/// ```
///
/// A builder holds no relationship to processes it already started: `start`
/// may be called any number of times, each call snapshotting whatever
/// configuration is current at that moment and producing an independent
/// [`ProcessHandle`]. Naming follows `std::process::Command` (`current_dir`
/// setter, `get_`-prefixed readers).
pub trait ProcessBuilder: Send {
    /// Replaces the whole command line. The first element is the program,
    /// the rest are its arguments. No validation happens here; an unusable
    /// command line surfaces as a `start` failure.
    fn command(&mut self, command: Vec<String>) -> &mut dyn ProcessBuilder;

    /// The current command line.
    fn get_command(&self) -> Vec<String>;

    /// Sets the working directory for the child. `None` means the child
    /// inherits the caller's current directory.
    fn current_dir(&mut self, dir: Option<PathBuf>) -> &mut dyn ProcessBuilder;

    /// The configured working directory, if any.
    fn get_current_dir(&self) -> Option<PathBuf>;

    /// The live environment map for the next `start`.
    ///
    /// This is a shared mutable view, not a copy: entries inserted or removed
    /// through the returned reference are visible on later calls and apply to
    /// the next launch. The map is not synchronized; mutating it from another
    /// thread while `start` is running is the caller's bug.
    fn environment(&mut self) -> &mut HashMap<String, String>;

    /// When true, the child's stderr is merged into its stdout at the handle
    /// level and the handle's stderr stream produces nothing.
    fn redirect_error_stream(&mut self, redirect: bool) -> &mut dyn ProcessBuilder;

    /// The current value of the merge flag.
    fn get_redirect_error_stream(&self) -> bool;

    /// Launches the configured command as a child process.
    ///
    /// Consumes OS resources (a process table entry and pipe descriptors for
    /// the standard streams) until the child is reaped and the caller drops
    /// the streams.
    fn start(&mut self) -> ProcessResult<Box<dyn ProcessHandle>>;
}
