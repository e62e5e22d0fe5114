//! jwtutil: encode a fixed claim set as a signed JWT, or decode a JWT
//! without verifying it.
//!
//! Entry point for the application. Parses CLI arguments into a run
//! plan and executes it against stdout.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cli::Cli;

/// Exit status for command-line usage errors.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "run failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and execute the resulting plan.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            e.print()?;
            Cli::command().print_help()?;
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let (plan, verbosity) = cli.into_plan();
    logging::init_logging(verbosity);
    tracing::debug!(?plan, "parsed arguments");

    if plan.is_empty() {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    plan.execute(&mut out)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
