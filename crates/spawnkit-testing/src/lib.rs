//! # Spawnkit Testing
//!
//! Loud-failure stand-ins for the spawnkit seam.
//!
//! Wire these as the default collaborators in a test harness: any code path
//! that reaches a process operation without an explicit working fake panics
//! immediately instead of silently spawning a real OS process.

pub mod unsupported;

pub use unsupported::{UnsupportedProcess, UnsupportedProcessBuilder};
