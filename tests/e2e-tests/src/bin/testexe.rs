use clap::Parser;
use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;

/// Fixture executable for spawnkit end-to-end tests.
///
/// Emits exactly what the flags ask for, in a fixed order, then exits with
/// the requested code. No extra output ever goes to stdout or stderr, so
/// tests can assert on stream contents byte for byte.
#[derive(Parser, Debug)]
#[command(name = "testexe")]
#[command(about = "Fixture executable for process seam testing", long_about = None)]
struct Args {
    /// Exit code to return
    #[arg(long, default_value = "0")]
    exit_code: i32,

    /// Milliseconds to sleep before exiting
    #[arg(long, default_value = "0")]
    run_duration_ms: u64,

    /// Line to print on stdout
    #[arg(long)]
    stdout: Option<String>,

    /// Line to print on stderr
    #[arg(long)]
    stderr: Option<String>,

    /// Copy stdin to stdout until EOF
    #[arg(long)]
    echo_stdin: bool,

    /// Print the value of this environment variable on stdout ("<unset>" if absent)
    #[arg(long)]
    print_env: Option<String>,

    /// Print the current working directory on stdout
    #[arg(long)]
    print_cwd: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(line) = &args.stdout {
        println!("{line}");
    }
    if let Some(line) = &args.stderr {
        eprintln!("{line}");
    }
    if let Some(name) = &args.print_env {
        match std::env::var(name) {
            Ok(value) => println!("{value}"),
            Err(_) => println!("<unset>"),
        }
    }
    if args.print_cwd {
        match std::env::current_dir() {
            Ok(dir) => println!("{}", dir.display()),
            Err(err) => eprintln!("current_dir failed: {err}"),
        }
    }
    if args.echo_stdin {
        let mut buffer = Vec::new();
        if io::stdin().read_to_end(&mut buffer).is_ok() {
            let _ = io::stdout().write_all(&buffer);
        }
    }
    if args.run_duration_ms > 0 {
        thread::sleep(Duration::from_millis(args.run_duration_ms));
    }

    // process::exit skips destructors; push out anything still buffered.
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
    std::process::exit(args.exit_code);
}
