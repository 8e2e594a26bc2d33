//! The panic-on-failure adapters over real OS processes.

mod common;

use common::testexe;
use spawnkit_process::OsProcessBuilder;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn setters_chain_and_delegate_to_the_wrapped_builder() {
    let mut builder = OsProcessBuilder::new().unchecked();
    builder
        .command(vec!["prog".to_string(), "arg".to_string()])
        .current_dir(Some(PathBuf::from("/tmp")))
        .redirect_error_stream(true);

    assert_eq!(builder.get_command(), vec!["prog", "arg"]);
    assert_eq!(builder.get_current_dir(), Some(PathBuf::from("/tmp")));
    assert!(builder.get_redirect_error_stream());

    builder
        .environment()
        .insert("SPAWNKIT_E2E_UNCHECKED".to_string(), "seen".to_string());
    assert_eq!(
        builder.environment().get("SPAWNKIT_E2E_UNCHECKED").map(String::as_str),
        Some("seen")
    );
}

#[test]
#[should_panic(expected = "spawn failed")]
fn start_panics_with_the_os_diagnostic() {
    let mut builder =
        OsProcessBuilder::with_command(["/nonexistent/spawnkit-e2e-missing"]).unchecked();
    let _ = builder.start();
}

#[test]
fn wait_returns_the_exit_code_directly() {
    let mut builder = testexe(&["--exit-code", "5"]).unchecked();
    let mut process = builder.start();
    assert_eq!(process.wait(), 5);
    assert!(!process.is_alive());
    assert_eq!(process.exit_code().unwrap(), 5);
}

#[test]
fn streams_flow_through_the_adapter() {
    let mut builder = testexe(&["--stdout", "through the adapter"]).unchecked();
    let mut process = builder.start();

    let mut output = String::new();
    process
        .take_stdout()
        .expect("stdout is piped")
        .read_to_string(&mut output)
        .unwrap();
    assert_eq!(output, "through the adapter\n");
    process.wait();
}

#[test]
fn wait_timeout_reports_expiry_and_completion() {
    let mut builder = testexe(&["--run-duration-ms", "30000"]).unchecked();
    let mut process = builder.start();
    assert!(!process.wait_timeout(Duration::from_millis(100)));

    process.destroy_forcibly();
    assert!(process.wait_timeout(Duration::from_secs(10)));
}

#[cfg(unix)]
#[test]
fn destroy_forcibly_chains_on_the_unchecked_type() {
    let mut builder = testexe(&["--run-duration-ms", "30000"]).unchecked();
    let mut process = builder.start();
    assert_eq!(process.destroy_forcibly().wait(), 137);
    assert!(!process.is_alive());
}
