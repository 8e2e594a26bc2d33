//! # Spawnkit Common
//!
//! Shared error types for the spawnkit process seam.
//!
//! Every other spawnkit crate builds on the [`ProcessError`] taxonomy and the
//! [`ProcessResult`] alias defined here.

pub mod errors;

pub use errors::{ProcessError, ProcessResult};
