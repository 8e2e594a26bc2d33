//! # Spawnkit API
//!
//! The trait seam between callers and the operating system's process-spawning
//! facility.
//!
//! Code that launches child processes depends on [`ProcessBuilder`] and
//! [`ProcessHandle`] instead of `std::process`, so a test harness can inject a
//! fake (or the loud-failure stand-ins from `spawnkit-testing`) without any
//! real process being spawned.
//!
//! Fallible operations return [`ProcessResult`](spawnkit_common::ProcessResult);
//! callers that prefer to treat a launch failure as unrecoverable can wrap any
//! implementation in the [`unchecked`] adapters, which convert errors into
//! panics carrying the original diagnostic.

pub mod builder;
pub mod handle;
pub mod unchecked;

pub use builder::ProcessBuilder;
pub use handle::ProcessHandle;
pub use unchecked::{UncheckedBuilder, UncheckedProcess};
