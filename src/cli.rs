//! CLI argument definitions for jwtutil.
//!
//! Uses `clap` derive macros to define a single flat command. Parsed
//! arguments are turned into a [`RunPlan`] before anything executes.
//!
//! # Security
//!
//! `Cli` implements a custom `Debug` to redact the token and secret and
//! prevent accidental leakage through debug formatting or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use zeroize::Zeroizing;

use crate::commands::RunPlan;

/// Encode or decode JSON Web Tokens (JWT).
///
/// Signs a fixed claim set (iss, name, iat, exp = iat + 1h) with HS256
/// and/or RS256, or prints the header and payload of an existing token
/// without verifying it.
#[derive(Parser)]
#[command(name = "jwtutil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File with a PEM-encoded RSA private key for RS256 encoding.
    #[arg(
        short = 'k',
        long,
        value_name = "KEYFILE",
        allow_hyphen_values = true,
        value_parser = parse_path
    )]
    pub keyfile: Option<PathBuf>,

    /// Secret for HS256 encoding, base64url-encoded like a JWK "k" value.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history.
    #[arg(
        short = 's',
        long,
        value_name = "SECRET",
        allow_hyphen_values = true,
        value_parser = parse_zeroizing_string
    )]
    pub secret: Option<Zeroizing<String>>,

    /// JWT to decode. The signature and expiry are NOT verified.
    #[arg(short = 't', long, value_name = "TOKEN", allow_hyphen_values = true)]
    pub token: Option<String>,

    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

/// Parse a path without clap's empty-value rejection so that an empty
/// `--keyfile=` can be treated as absent.
fn parse_path(s: &str) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(s))
}

/// Custom `Debug` that redacts token and secret fields to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("keyfile", &self.keyfile)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Cli {
    /// Split the parsed arguments into the action plan and the verbosity.
    ///
    /// An empty `--keyfile=` or `--secret=` counts as not supplied and
    /// skips that encode.
    pub fn into_plan(self) -> (RunPlan, u8) {
        let plan = RunPlan {
            token: self.token,
            keyfile: self.keyfile.filter(|path| !path.as_os_str().is_empty()),
            secret: self.secret.filter(|secret| !secret.is_empty()),
        };
        (plan, self.verbose)
    }
}
