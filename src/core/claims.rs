//! The fixed claim set signed by the encode path.
//!
//! Claims are a pure function of the issue time so callers (and tests)
//! can inject the clock instead of relying on a value captured at startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issuer written into every token.
pub const ISSUER: &str = "data_henrik";

/// Subject name written into every token.
pub const SUBJECT_NAME: &str = "henrik";

/// Seconds between `iat` and `exp`.
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// The claims carried in an encoded token's payload.
///
/// Field order is the serialization order, which keeps the payload
/// segment deterministic for a given issue time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub iss: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl ClaimSet {
    /// Build the claim set for a token issued at `now`.
    pub fn issued_at(now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: ISSUER.to_string(),
            name: SUBJECT_NAME.to_string(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        }
    }
}

/// Build the claim set for a token issued right now.
pub fn build_claims() -> ClaimSet {
    ClaimSet::issued_at(Utc::now())
}
