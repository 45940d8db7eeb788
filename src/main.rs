//! Emailgen: email address generation from a name and a format template.
//!
//! This is the main entry point for the `emailgen` CLI. It parses arguments
//! (prompting on stdin for any that are omitted), runs the generator, and
//! handles errors with proper exit codes.

use emailgen::cli::Cli;
use emailgen::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics for the non-fatal failure paths are emitted at WARN, so
    // make that the default unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match commands::cmd_generate(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
