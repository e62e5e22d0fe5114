//! Lenient base64url decoding.
//!
//! Accepts what JWK `k` values and hand-built tokens carry in practice:
//! standard (`+/`) or URL-safe (`-_`) alphabet, with or without `=`
//! padding, and nonzero leftover bits in the final symbol.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use zeroize::Zeroizing;

const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode `input`, folding the standard alphabet onto the URL-safe one.
pub fn decode_lenient(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // The folded copy may hold secret material.
    let folded: Zeroizing<String> = Zeroizing::new(
        input
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                other => other,
            })
            .collect(),
    );
    LENIENT_URL_SAFE.decode(folded.as_bytes())
}
