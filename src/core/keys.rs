//! Signing keys and the algorithms they pair with.
//!
//! HS256 secrets are imported the way a JWK `{"kty":"oct","k":...}` is:
//! the string is base64url-decoded into the raw key octets. RS256 keys
//! are PEM-encoded RSA private keys (PKCS#1 or PKCS#8) read from disk.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use jsonwebtoken::{Algorithm, EncodingKey};
use zeroize::Zeroizing;

use crate::core::base64url::decode_lenient;
use crate::error::JwtUtilError;

/// The signature algorithms this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    /// HMAC-SHA256 with a shared secret.
    Hs256,
    /// RSASSA-PKCS1-v1_5 with SHA-256 and an RSA private key.
    Rs256,
}

impl SigningAlgorithm {
    /// The JOSE name written into the token header.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Rs256 => "RS256",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = JwtUtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Self::Hs256),
            "RS256" => Ok(Self::Rs256),
            other => Err(JwtUtilError::UnsupportedAlgorithm {
                algorithm: other.to_string(),
            }),
        }
    }
}

impl From<SigningAlgorithm> for Algorithm {
    fn from(alg: SigningAlgorithm) -> Self {
        match alg {
            SigningAlgorithm::Hs256 => Algorithm::HS256,
            SigningAlgorithm::Rs256 => Algorithm::RS256,
        }
    }
}

/// Key material for one encode operation.
pub enum SigningKey {
    /// Raw HMAC key octets.
    Symmetric { secret: Zeroizing<Vec<u8>> },
    /// A parsed RSA private key.
    Asymmetric { private_key: EncodingKey },
}

/// Custom `Debug` that never prints key material.
impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symmetric { .. } => f
                .debug_struct("Symmetric")
                .field("secret", &"[REDACTED]")
                .finish(),
            Self::Asymmetric { .. } => f
                .debug_struct("Asymmetric")
                .field("private_key", &"[REDACTED]")
                .finish(),
        }
    }
}

impl SigningKey {
    /// Import an HS256 secret given as a JWK `k` value (base64url).
    ///
    /// Decoding is lenient: either alphabet, optional padding, and
    /// leftover bits in the last symbol are accepted, so a plain phrase
    /// such as `secret` still yields a key. The string is used exactly
    /// as given; surrounding whitespace is not stripped.
    ///
    /// # Errors
    ///
    /// Returns [`JwtUtilError::KeyLoad`] if the secret is not base64 or
    /// decodes to an empty key.
    pub fn from_secret(secret: &str) -> Result<Self, JwtUtilError> {
        let bytes = Zeroizing::new(decode_lenient(secret).map_err(|_| {
            JwtUtilError::KeyLoad {
                origin: "secret".to_string(),
                reason: "secret is not valid base64url".to_string(),
            }
        })?);

        if bytes.is_empty() {
            return Err(JwtUtilError::KeyLoad {
                origin: "secret".to_string(),
                reason: "secret decodes to an empty key".to_string(),
            });
        }

        tracing::debug!(key_len = bytes.len(), "imported symmetric key");
        Ok(Self::Symmetric { secret: bytes })
    }

    /// Load an RS256 private key from a PEM file.
    ///
    /// The file is read fully and closed before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns [`JwtUtilError::KeyLoad`] if the file cannot be read or
    /// does not contain an RSA private key.
    pub fn from_pem_file(path: &Path) -> Result<Self, JwtUtilError> {
        let origin = format!("'{}'", path.display());
        let pem = Zeroizing::new(std::fs::read(path).map_err(|e| JwtUtilError::KeyLoad {
            origin: origin.clone(),
            reason: e.to_string(),
        })?);

        let private_key =
            EncodingKey::from_rsa_pem(&pem).map_err(|e| JwtUtilError::KeyLoad {
                origin,
                reason: format!("not a PEM-encoded RSA private key ({e})"),
            })?;

        tracing::debug!(path = %path.display(), "loaded RSA private key");
        Ok(Self::Asymmetric { private_key })
    }

    /// The algorithm this key signs with.
    pub fn algorithm(&self) -> SigningAlgorithm {
        match self {
            Self::Symmetric { .. } => SigningAlgorithm::Hs256,
            Self::Asymmetric { .. } => SigningAlgorithm::Rs256,
        }
    }

    /// Short human-readable description of the key kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Symmetric { .. } => "symmetric",
            Self::Asymmetric { .. } => "RSA private",
        }
    }

    /// Build the `jsonwebtoken` key used for signing.
    pub(crate) fn encoding_key(&self) -> EncodingKey {
        match self {
            Self::Symmetric { secret } => EncodingKey::from_secret(secret),
            Self::Asymmetric { private_key } => private_key.clone(),
        }
    }
}
