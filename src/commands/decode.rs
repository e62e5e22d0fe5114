//! Handler for the `--token` action.
//!
//! Decodes and pretty-prints a JWT's header and payload without
//! verifying its signature or checking its expiry.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::decoder::decode_unverified;
use crate::display::token_printer::print_decoded;

/// Decode `token` without verification and print header and payload.
pub fn execute<W: Write>(out: &mut W, token: &str) -> Result<()> {
    let decoded = decode_unverified(token).context("could not decode token")?;
    tracing::warn!(
        signature_len = decoded.signature.len(),
        "signature and expiry were not verified"
    );
    print_decoded(out, &decoded).context("failed to write decoded token")?;
    Ok(())
}
