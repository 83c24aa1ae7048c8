//! Token error types

use thiserror::Error;

/// Token operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors produced while building a codec, issuing or verifying tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed, tampered, forged or wrong-key token.
    ///
    /// The message is deliberately generic so callers cannot leak which
    /// check rejected the token.
    #[error("Invalid token")]
    Invalid,
    /// Signature is valid but the token outlived its TTL
    #[error("Token has expired")]
    Expired,
    /// Secret key unusable for HMAC-SHA256 signing
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// TTL was under one second or not a whole number of seconds
    #[error("Token TTL must be a positive whole number of seconds")]
    InvalidTtl,
    /// Payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Encoded token would exceed the URL-safe length limit
    #[error("Token of {len} bytes exceeds the {max} byte limit")]
    TooLong {
        /// Encoded length
        len: usize,
        /// Permitted maximum
        max: usize,
    },
}

impl TokenError {
    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        TokenError::InvalidKey(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        TokenError::Serialization(msg.to_string())
    }

    /// Whether this error came from presenting a bad or stale token,
    /// as opposed to misconfiguration of the codec
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, TokenError::Invalid | TokenError::Expired)
    }
}

impl From<TokenError> for storefront_common::Error {
    fn from(error: TokenError) -> Self {
        use storefront_common::ErrorKind;

        let kind = match &error {
            TokenError::Invalid | TokenError::Expired => ErrorKind::PermissionDenied,
            TokenError::InvalidKey(_) | TokenError::InvalidTtl => ErrorKind::Configuration,
            TokenError::Serialization(_) => ErrorKind::Serialization,
            TokenError::TooLong { .. } => ErrorKind::Validation,
        };
        storefront_common::Error::with_source(kind, error)
    }
}
