//! jwt-lens: an offline CLI for inspecting JWTs, Base64 blobs, and
//! AES-CBC ciphertexts.
//!
//! Entry point for the application. Parses CLI arguments into a
//! [`cli::Config`] and hands it to the driver.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::Cli;
use commands::run::Outcome;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and run the requested operations.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut stdout = std::io::stdout().lock();
    match commands::run::execute(cli.into_config(), &mut stdout)? {
        Outcome::Completed => Ok(ExitCode::SUCCESS),
        Outcome::MissingInput => {
            // A bare invocation is not a failure.
            eprintln!("Error: missing token flag");
            eprintln!("{}", Cli::command().render_help());
            Ok(ExitCode::SUCCESS)
        }
    }
}
