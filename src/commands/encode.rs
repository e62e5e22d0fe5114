//! Handlers for the `--keyfile` and `--secret` actions.
//!
//! Each handler loads its key, builds a fresh claim set, signs it, and
//! prints the labelled token. Nothing is printed if any step fails.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::claims::build_claims;
use crate::core::encoder::encode_token;
use crate::core::keys::{SigningAlgorithm, SigningKey};
use crate::display::token_printer::print_encoded;

/// Sign the claim set with the RSA private key in `keyfile`.
pub fn execute_rs256<W: Write>(out: &mut W, keyfile: &Path) -> Result<()> {
    let key = SigningKey::from_pem_file(keyfile).context("RS256 encoding failed")?;
    sign_and_print(out, &key, SigningAlgorithm::Rs256)
}

/// Sign the claim set with the HMAC secret.
pub fn execute_hs256<W: Write>(out: &mut W, secret: &str) -> Result<()> {
    let key = SigningKey::from_secret(secret).context("HS256 encoding failed")?;
    sign_and_print(out, &key, SigningAlgorithm::Hs256)
}

fn sign_and_print<W: Write>(out: &mut W, key: &SigningKey, alg: SigningAlgorithm) -> Result<()> {
    let claims = build_claims();
    let token =
        encode_token(&claims, key, alg).with_context(|| format!("{alg} encoding failed"))?;
    print_encoded(out, alg, &token).context("failed to write token")?;
    Ok(())
}
