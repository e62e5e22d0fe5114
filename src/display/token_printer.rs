//! Output blocks for encoded and decoded tokens.

use std::io::{self, Write};

use crate::core::decoder::UnverifiedToken;
use crate::core::keys::SigningAlgorithm;
use crate::display::json_printer::print_json;

/// Write an encoded token under its algorithm label.
///
/// ```text
/// Token using HS256:
/// eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9.eyJpc3Mi...
/// ```
pub fn print_encoded<W: Write>(out: &mut W, alg: SigningAlgorithm, token: &str) -> io::Result<()> {
    writeln!(out, "Token using {alg}:")?;
    writeln!(out, "{token}")
}

/// Write the header and payload of an unverified token.
pub fn print_decoded<W: Write>(out: &mut W, decoded: &UnverifiedToken) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Decoded token header and payload:")?;
    print_json(out, &decoded.header)?;
    print_json(out, &decoded.payload)
}
