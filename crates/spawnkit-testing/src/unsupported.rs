//! Stand-ins that fail on every operation.
//!
//! Both types are stateless: no call has any observable side effect, and the
//! panic message is the fixed `unimplemented!` diagnostic regardless of
//! arguments.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use spawnkit_api::{
    ProcessBuilder, ProcessHandle, UncheckedBuilder, UncheckedProcess,
};
use spawnkit_common::ProcessResult;

/// Launch configuration stand-in; every operation panics.
#[derive(Debug, Default)]
pub struct UnsupportedProcessBuilder;

impl UnsupportedProcessBuilder {
    pub fn new() -> Self {
        Self
    }

    /// The same stand-in behind the panic-on-failure surface.
    pub fn unchecked() -> UncheckedBuilder {
        UncheckedBuilder::new(Box::new(Self))
    }
}

impl ProcessBuilder for UnsupportedProcessBuilder {
    fn command(&mut self, _command: Vec<String>) -> &mut dyn ProcessBuilder {
        unimplemented!()
    }

    fn get_command(&self) -> Vec<String> {
        unimplemented!()
    }

    fn current_dir(&mut self, _dir: Option<PathBuf>) -> &mut dyn ProcessBuilder {
        unimplemented!()
    }

    fn get_current_dir(&self) -> Option<PathBuf> {
        unimplemented!()
    }

    fn environment(&mut self) -> &mut HashMap<String, String> {
        unimplemented!()
    }

    fn redirect_error_stream(&mut self, _redirect: bool) -> &mut dyn ProcessBuilder {
        unimplemented!()
    }

    fn get_redirect_error_stream(&self) -> bool {
        unimplemented!()
    }

    fn start(&mut self) -> ProcessResult<Box<dyn ProcessHandle>> {
        unimplemented!()
    }
}

/// Process handle stand-in; every operation panics.
#[derive(Debug, Default)]
pub struct UnsupportedProcess;

impl UnsupportedProcess {
    pub fn new() -> Self {
        Self
    }

    /// The same stand-in behind the panic-on-failure surface.
    pub fn unchecked() -> UncheckedProcess {
        UncheckedProcess::new(Box::new(Self))
    }
}

impl ProcessHandle for UnsupportedProcess {
    fn take_stdin(&mut self) -> Option<Box<dyn Write + Send>> {
        unimplemented!()
    }

    fn take_stdout(&mut self) -> Option<Box<dyn Read + Send>> {
        unimplemented!()
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        unimplemented!()
    }

    fn wait(&mut self) -> ProcessResult<i32> {
        unimplemented!()
    }

    fn wait_timeout(&mut self, _timeout: Duration) -> ProcessResult<bool> {
        unimplemented!()
    }

    fn exit_code(&mut self) -> ProcessResult<i32> {
        unimplemented!()
    }

    fn destroy(&mut self) {
        unimplemented!()
    }

    fn destroy_forcibly(&mut self) -> &mut dyn ProcessHandle {
        unimplemented!()
    }

    fn is_alive(&mut self) -> bool {
        unimplemented!()
    }
}
