//! Command handlers and the run plan that sequences them.
//!
//! Flags are collected into a [`RunPlan`] before anything runs, so the
//! order of output never depends on the order of flags on the command
//! line: decode first, then RS256, then HS256.

pub mod decode;
pub mod encode;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use zeroize::Zeroizing;

/// The actions requested for one invocation.
#[derive(Default)]
pub struct RunPlan {
    /// Token to decode without verification.
    pub token: Option<String>,
    /// PEM private key for an RS256 token.
    pub keyfile: Option<PathBuf>,
    /// JWK `k` value for an HS256 token.
    pub secret: Option<Zeroizing<String>>,
}

/// Custom `Debug` that redacts token and secret.
impl fmt::Debug for RunPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunPlan")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("keyfile", &self.keyfile)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl RunPlan {
    /// Whether no action was requested.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.keyfile.is_none() && self.secret.is_none()
    }

    /// Run every requested action in fixed order, stopping at the first
    /// failure. Output from earlier actions stays written.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(token) = &self.token {
            tracing::info!("decoding token without verification");
            decode::execute(out, token)?;
        }

        if let Some(keyfile) = &self.keyfile {
            tracing::info!(keyfile = %keyfile.display(), "encoding with RS256");
            encode::execute_rs256(out, keyfile)?;
        }

        if let Some(secret) = &self.secret {
            tracing::info!("encoding with HS256");
            encode::execute_hs256(out, secret)?;
        }

        Ok(())
    }
}
