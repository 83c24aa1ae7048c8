//! Token type definitions

use crate::payload::Payload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm identifier written into every token header
pub(crate) const ALGORITHM: &str = "HS256";

/// Signed header segment: algorithm plus issuance and expiry instants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TokenHeader {
    pub alg: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenHeader {
    pub(crate) fn new(iat: i64, exp: i64) -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            iat,
            exp,
        }
    }
}

/// An issued token: URL-safe text with no server-side record behind it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedToken(String);

impl SignedToken {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    /// Borrow the token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the token text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SignedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SignedToken> for String {
    fn from(token: SignedToken) -> Self {
        token.0
    }
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// The payload that was signed
    pub payload: Payload,
    /// Issuance time, unix seconds
    pub issued_at: i64,
    /// Last instant (inclusive) at which the token is accepted, unix seconds
    pub expires_at: i64,
}

impl VerifiedToken {
    /// Issuance time as a UTC timestamp, if representable
    #[must_use]
    pub fn issued_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.issued_at, 0)
    }

    /// Expiry time as a UTC timestamp, if representable
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires_at, 0)
    }

    /// The TTL the token was issued with, in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.expires_at.saturating_sub(self.issued_at)
    }
}
