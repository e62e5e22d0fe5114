//! Shared test fixtures and helper utilities.
//!
//! Provides known tokens, key paths, and helpers for pulling tokens
//! out of the CLI's output.
#![allow(dead_code)]

/// An HS256 token with a fixed claim set and a bogus signature.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"iss":"data_henrik","name":"henrik","iat":1705329000,"exp":1705332600}`
pub const FIXED_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJpc3MiOiJkYXRhX2hlbnJpayIsIm5hbWUiOiJoZW5yaWsiLCJpYXQiOjE3MDUzMjkwMDAsImV4cCI6MTcwNTMzMjYwMH0.\
     c2lnbmF0dXJl";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A token with far too many segments.
pub const MALFORMED_TOKEN_TOO_MANY_PARTS: &str = "not.a.valid.token.with.too.many.dots";

/// The JWK-style secret used by the encode scenarios.
pub const HS256_SECRET: &str = "bXlzZWNyZXQ=";

/// The raw key octets `HS256_SECRET` decodes to.
pub const HS256_SECRET_OCTETS: &[u8] = b"mysecret";

/// Path to the test RSA private key fixture.
pub const RSA_PRIVATE_KEY_PATH: &str = "tests/fixtures/rsa_private.pem";

/// Path to the test RSA public key fixture.
pub const RSA_PUBLIC_KEY_PATH: &str = "tests/fixtures/rsa_public.pem";

/// Path to a file that exists but holds no key.
pub const NOT_A_KEY_PATH: &str = "tests/fixtures/not_a_key.pem";

/// Return the token printed on the line after `label`.
pub fn token_after_label(stdout: &str, label: &str) -> String {
    let mut lines = stdout.lines();
    lines
        .by_ref()
        .find(|line| *line == label)
        .unwrap_or_else(|| panic!("label {label:?} not found in output:\n{stdout}"));
    lines.next().expect("no token after label").to_string()
}

/// Verify an HS256 token with the raw secret octets and return its claims.
pub fn verify_hs256(token: &str, secret: &[u8]) -> serde_json::Value {
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
    let data = decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();
    data.claims
}

/// Verify an RS256 token with the test public key and return its claims.
pub fn verify_rs256(token: &str) -> serde_json::Value {
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
    let public_key = std::fs::read(RSA_PUBLIC_KEY_PATH).unwrap();
    let data = decode::<serde_json::Value>(
        token,
        &DecodingKey::from_rsa_pem(&public_key).unwrap(),
        &Validation::new(Algorithm::RS256),
    )
    .unwrap();
    data.claims
}
