//! JWT encoding.
//!
//! Produces a compact JWS (`header.payload.signature`) for a claim set.
//! Header construction, base64url encoding, and the HMAC/RSA signature
//! over the signing input are delegated to `jsonwebtoken`.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Header, encode};

use crate::core::claims::ClaimSet;
use crate::core::keys::{SigningAlgorithm, SigningKey};
use crate::error::JwtUtilError;

/// Sign `claims` with `key` using `alg` and return the compact token.
///
/// The header is `{"typ":"JWT","alg":<alg>}`.
///
/// # Errors
///
/// Returns [`JwtUtilError::KeyAlgorithmMismatch`] if `key` cannot sign
/// with `alg`, [`JwtUtilError::KeyLoad`] if the RSA key material is
/// rejected when signing, or [`JwtUtilError::Signing`] for any other
/// library failure.
pub fn encode_token(
    claims: &ClaimSet,
    key: &SigningKey,
    alg: SigningAlgorithm,
) -> Result<String, JwtUtilError> {
    if key.algorithm() != alg {
        return Err(JwtUtilError::KeyAlgorithmMismatch {
            key: key.kind(),
            algorithm: alg.to_string(),
        });
    }

    let header = Header::new(alg.into());
    let token = encode(&header, claims, &key.encoding_key()).map_err(|e| match e.kind() {
        ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidKeyFormat => JwtUtilError::KeyLoad {
            origin: "RSA key material".to_string(),
            reason: e.to_string(),
        },
        _ => JwtUtilError::Signing {
            reason: e.to_string(),
        },
    })?;

    tracing::debug!(%alg, iat = claims.iat, exp = claims.exp, "encoded token");
    Ok(token)
}
