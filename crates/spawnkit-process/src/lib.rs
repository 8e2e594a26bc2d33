//! # Spawnkit Process
//!
//! OS-backed implementation of the spawnkit seam.
//!
//! [`OsProcessBuilder`] implements
//! [`ProcessBuilder`](spawnkit_api::ProcessBuilder) by configuring and
//! spawning a `std::process::Command`; [`OsProcess`] implements
//! [`ProcessHandle`](spawnkit_api::ProcessHandle) over the resulting child.
//! Nothing is added on top of the platform facility: no supervision, no
//! retries, no output buffering policy.

pub mod builder;
pub mod handle;

#[cfg(unix)]
pub mod terminate;

pub use builder::OsProcessBuilder;
pub use handle::OsProcess;
