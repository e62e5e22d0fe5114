//! JWT decoding without verification.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding the header and payload, and
//! parsing both as JSON values.
//!
//! # Security
//!
//! Nothing here checks the signature or the temporal claims. A token
//! that decodes successfully is not authentic; the result type is named
//! [`UnverifiedToken`] so that call sites say so.

use std::fmt;

use serde_json::Value;

use crate::core::base64url::decode_lenient;
use crate::error::JwtUtilError;

/// The decoded, unverified parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
pub struct UnverifiedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Value,
    /// The parsed JWT payload (claims) as transmitted.
    pub payload: Value,
    /// The raw base64url-encoded signature segment, never checked.
    pub signature: String,
}

/// Custom `Debug` that redacts payload and signature to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for UnverifiedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnverifiedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Decode a raw JWT string into its parts without verifying it.
///
/// Splits the token on `.` separators, base64url-decodes the header
/// and payload segments, and parses them as JSON. The signature is
/// returned as its raw base64url-encoded string. Neither the signature
/// nor `exp`/`iat` is checked.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, or if JSON parsing fails.
pub fn decode_unverified(token: &str) -> Result<UnverifiedToken, JwtUtilError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtUtilError::MalformedToken {
            segments: parts.len(),
        });
    }

    let header = decode_segment(parts[0], "header")?;
    let payload = decode_segment(parts[1], "payload")?;
    let signature = parts[2].to_string();

    tracing::debug!(
        alg = header.get("alg").and_then(serde_json::Value::as_str).unwrap_or("<none>"),
        "decoded token without verification"
    );

    Ok(UnverifiedToken {
        header,
        payload,
        signature,
    })
}

/// Base64url-decode a segment and parse it as JSON.
///
/// Padded segments and nonzero leftover bits are tolerated so that
/// loosely encoded tokens can still be inspected.
fn decode_segment(encoded: &str, segment_name: &str) -> Result<Value, JwtUtilError> {
    let bytes = decode_lenient(encoded).map_err(|_| JwtUtilError::Base64Decode {
        segment: segment_name.to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| JwtUtilError::JsonParse {
        segment: segment_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Header: {"alg":"HS256","typ":"JWT"}
    // Payload: {"iss":"data_henrik","name":"henrik","iat":1705329000,"exp":1705332600}
    const HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
        eyJpc3MiOiJkYXRhX2hlbnJpayIsIm5hbWUiOiJoZW5yaWsiLCJpYXQiOjE3MDUzMjkwMDAsImV4cCI6MTcwNTMzMjYwMH0.\
        c2lnbmF0dXJl";

    #[test]
    fn test_debug_redacts_sensitive_fields() {
        let decoded = decode_unverified(HS256_TOKEN).unwrap();
        let debug_output = format!("{:?}", decoded);

        // Header is shown (not sensitive)
        assert!(debug_output.contains("HS256"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("data_henrik"));
        assert!(!debug_output.contains("c2lnbmF0dXJl"));
    }

    #[test]
    fn test_decode_valid_token() {
        let decoded = decode_unverified(HS256_TOKEN).unwrap();

        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.header["typ"], "JWT");
        assert_eq!(decoded.payload["iss"], "data_henrik");
        assert_eq!(decoded.payload["name"], "henrik");
        assert_eq!(decoded.payload["iat"], 1705329000);
        assert_eq!(decoded.payload["exp"], 1705332600);
        assert_eq!(decoded.signature, "c2lnbmF0dXJl");
    }

    #[test]
    fn test_decode_ignores_expired_claims() {
        // Payload: {"exp":1} — long expired
        let decoded = decode_unverified("eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjF9.bogus").unwrap();
        assert_eq!(decoded.payload["exp"], 1);
    }

    #[test]
    fn test_decode_too_many_segments_fails() {
        let err = decode_unverified("not.a.valid.token.with.too.many.dots").unwrap_err();
        assert!(matches!(err, JwtUtilError::MalformedToken { segments: 8 }));
    }

    #[test]
    fn test_decode_single_segment_fails() {
        let err = decode_unverified("onlyonesegment").unwrap_err();
        assert!(matches!(err, JwtUtilError::MalformedToken { segments: 1 }));
    }

    #[test]
    fn test_decode_two_segments_fails() {
        let err = decode_unverified("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0In0").unwrap_err();
        assert!(matches!(err, JwtUtilError::MalformedToken { segments: 2 }));
    }

    #[test]
    fn test_decode_empty_string_fails() {
        let err = decode_unverified("").unwrap_err();
        assert!(matches!(err, JwtUtilError::MalformedToken { segments: 1 }));
    }

    #[test]
    fn test_decode_invalid_base64_header_fails() {
        let err = decode_unverified("!!!invalid!!!.eyJzdWIiOiIxMjM0In0.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtUtilError::Base64Decode { segment } if segment == "header"
        ));
    }

    #[test]
    fn test_decode_invalid_base64_payload_fails() {
        let err = decode_unverified("eyJhbGciOiJIUzI1NiJ9.!!!invalid!!!.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtUtilError::Base64Decode { segment } if segment == "payload"
        ));
    }

    #[test]
    fn test_decode_invalid_json_header_fails() {
        // bm90IGpzb24 = "not json"
        let err = decode_unverified("bm90IGpzb24.eyJzdWIiOiIxMjM0In0.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtUtilError::JsonParse { segment, .. } if segment == "header"
        ));
    }

    #[test]
    fn test_decode_invalid_json_payload_fails() {
        let err = decode_unverified("eyJhbGciOiJIUzI1NiJ9.bm90IGpzb24.sig").unwrap_err();
        assert!(matches!(
            err,
            JwtUtilError::JsonParse { segment, .. } if segment == "payload"
        ));
    }

    #[test]
    fn test_decode_accepts_padded_segments() {
        // {"alg":"none"} and {} with their '=' padding kept
        let decoded = decode_unverified("eyJhbGciOiJub25lIn0=.e30=.sig").unwrap();
        assert_eq!(decoded.header["alg"], "none");
        assert!(decoded.payload.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_decode_ignores_leftover_bits() {
        // "e31" differs from "e30" only in the two bits past the last byte
        let decoded = decode_unverified("eyJhbGciOiJub25lIn0.e31.sig").unwrap();
        assert!(decoded.payload.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_decode_empty_signature_is_not_checked() {
        // eyJhbGciOiJub25lIn0 = {"alg":"none"}, e30 = {}
        let decoded = decode_unverified("eyJhbGciOiJub25lIn0.e30.").unwrap();
        assert_eq!(decoded.header["alg"], "none");
        assert!(decoded.payload.as_object().unwrap().is_empty());
        assert_eq!(decoded.signature, "");
    }
}
