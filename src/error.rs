//! Domain error types for jwtutil.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.
//! No variant ever carries secret or token material.

use thiserror::Error;

/// Errors that can occur while building, encoding, or decoding a JWT.
#[derive(Debug, Error)]
pub enum JwtUtilError {
    /// The token does not split into exactly three dot-separated segments.
    #[error(
        "malformed token: expected 'header.payload.signature' structure, found {segments} segment(s)"
    )]
    MalformedToken {
        /// How many segments the token actually had.
        segments: usize,
    },

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64Decode {
        /// Which segment failed to decode ("header" or "payload").
        segment: String,
    },

    /// A decoded segment is not valid JSON.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParse {
        /// Which segment failed to parse ("header" or "payload").
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// Signing key material could not be loaded.
    #[error("failed to load signing key from {origin}: {reason}")]
    KeyLoad {
        /// Where the key came from (a file path or "secret").
        origin: String,
        /// Description of the load failure.
        reason: String,
    },

    /// The requested algorithm is neither HS256 nor RS256.
    #[error("unsupported algorithm: {algorithm} (supported: HS256, RS256)")]
    UnsupportedAlgorithm {
        /// The algorithm name that was requested.
        algorithm: String,
    },

    /// The signing key cannot be used with the requested algorithm.
    #[error("{key} key cannot sign with {algorithm}")]
    KeyAlgorithmMismatch {
        /// Kind of key supplied ("symmetric" or "RSA private").
        key: &'static str,
        /// The algorithm that was requested.
        algorithm: String,
    },

    /// The signing library failed to produce a token.
    #[error("signing failed: {reason}")]
    Signing {
        /// Description of the signing failure.
        reason: String,
    },
}
