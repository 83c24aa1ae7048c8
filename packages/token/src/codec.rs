//! Issuing and verifying signed, expiring tokens
//!
//! A token is three URL-safe base64 segments joined by `.`:
//!
//! ```text
//! b64(header) . b64(payload) . b64(HMAC-SHA256(secret, b64(header) "." b64(payload)))
//! ```
//!
//! The header is `{"alg":"HS256","iat":<issued>,"exp":<expires>}`, so the
//! MAC covers both the payload and the validity window, and the TTL used
//! at issuance is recoverable at verification.

use crate::clock::{Clock, SystemClock};
use crate::config::TokenConfig;
use crate::crypto::encoding::{base64_url_decode, base64_url_encode};
use crate::crypto::hmac_sha256::{MAC_LEN, hmac_sha256_sign, hmac_sha256_verify};
use crate::error::{TokenError, TokenResult};
use crate::keys::{EnvSecret, SecretKey, SecretSource};
use crate::payload::Payload;
use crate::types::{ALGORITHM, SignedToken, TokenHeader, VerifiedToken};
use chrono::Duration;
use std::sync::Arc;

/// Longest token accepted or produced, in bytes.
///
/// Keeps activation links within common URL length limits and bounds the
/// work done on untrusted input.
pub const MAX_TOKEN_LEN: usize = 4096;

/// Stateless token issuer and verifier.
///
/// Holds an immutable secret and default TTL; cheap to clone and safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    key: SecretKey,
    fallback_keys: Vec<SecretKey>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec from raw secret bytes
    ///
    /// # Errors
    /// - `TokenError::InvalidKey` if the secret is shorter than 32 bytes
    /// - `TokenError::InvalidTtl` if `default_ttl` is under one second
    pub fn new(secret: impl Into<Vec<u8>>, default_ttl: Duration) -> TokenResult<Self> {
        Self::from_key(SecretKey::new(secret)?, default_ttl)
    }

    /// Create a codec from an already validated key
    ///
    /// # Errors
    /// Returns `TokenError::InvalidTtl` if `default_ttl` is under one second
    pub fn from_key(key: SecretKey, default_ttl: Duration) -> TokenResult<Self> {
        ttl_seconds(default_ttl)?;
        Ok(Self {
            key,
            fallback_keys: Vec::new(),
            default_ttl,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create a codec whose secret comes from `source`
    ///
    /// # Errors
    /// Propagates the source's resolution error, or `TokenError::InvalidTtl`
    pub fn from_source(source: &dyn SecretSource, default_ttl: Duration) -> TokenResult<Self> {
        Self::from_key(source.resolve()?, default_ttl)
    }

    /// Build a codec from configuration, resolving every secret now
    ///
    /// # Errors
    /// Returns an error if any configured secret is missing or too short,
    /// or if the configured TTL is zero
    pub fn from_config(config: &TokenConfig) -> TokenResult<Self> {
        let mut codec = Self::from_source(&EnvSecret::new(&config.secret_env), config.default_ttl()?)?;
        for var in &config.fallback_secret_envs {
            codec.fallback_keys.push(EnvSecret::new(var).resolve()?);
        }
        tracing::info!(
            secret_env = %config.secret_env,
            default_ttl_seconds = config.default_ttl_seconds,
            fallback_keys = codec.fallback_keys.len(),
            "token codec configured"
        );
        Ok(codec)
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Also accept tokens signed with a retired secret.
    ///
    /// New tokens are always signed with the primary secret.
    ///
    /// # Errors
    /// Returns `TokenError::InvalidKey` if the secret is shorter than 32 bytes
    pub fn with_fallback_key(mut self, secret: impl Into<Vec<u8>>) -> TokenResult<Self> {
        self.fallback_keys.push(SecretKey::new(secret)?);
        Ok(self)
    }

    /// TTL used by [`issue`](Self::issue)
    #[must_use]
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `payload` that expires after the default TTL
    ///
    /// # Errors
    /// Returns `TokenError::Serialization` if the payload cannot be encoded
    pub fn issue(&self, payload: &Payload) -> TokenResult<SignedToken> {
        self.issue_with_ttl(payload, self.default_ttl)
    }

    /// Issue a token for `payload` that expires after `ttl`
    ///
    /// Timestamps have whole-second resolution, so `ttl` must be a whole
    /// number of seconds.
    ///
    /// # Errors
    /// - `TokenError::InvalidTtl` if `ttl` is under one second, has a
    ///   fractional second, or overflows the expiry timestamp
    /// - `TokenError::Serialization` if the payload cannot be encoded
    /// - `TokenError::TooLong` if the encoded token exceeds [`MAX_TOKEN_LEN`]
    pub fn issue_with_ttl(&self, payload: &Payload, ttl: Duration) -> TokenResult<SignedToken> {
        let ttl = ttl_seconds(ttl)?;
        let issued_at = self.clock.unix_seconds();
        let expires_at = issued_at.checked_add(ttl).ok_or(TokenError::InvalidTtl)?;

        let header = serde_json::to_vec(&TokenHeader::new(issued_at, expires_at))
            .map_err(|e| TokenError::serialization(&e.to_string()))?;
        let body = payload
            .to_canonical_json()
            .map_err(|e| TokenError::serialization(&e.to_string()))?;

        let signing_input = format!("{}.{}", base64_url_encode(&header), base64_url_encode(&body));
        let tag = hmac_sha256_sign(signing_input.as_bytes(), self.key.expose())?;

        let token = format!("{signing_input}.{}", base64_url_encode(&tag));
        if token.len() > MAX_TOKEN_LEN {
            return Err(TokenError::TooLong {
                len: token.len(),
                max: MAX_TOKEN_LEN,
            });
        }
        Ok(SignedToken::new(token))
    }

    /// Verify `token` and return its payload
    ///
    /// # Errors
    /// - `TokenError::Invalid` for malformed, tampered or foreign tokens
    /// - `TokenError::Expired` for authentic tokens past their TTL
    pub fn verify(&self, token: &str) -> TokenResult<Payload> {
        self.verify_detailed(token).map(|verified| verified.payload)
    }

    /// Verify `token` and return its payload with the signed timestamps
    ///
    /// # Errors
    /// Same as [`verify`](Self::verify)
    pub fn verify_detailed(&self, token: &str) -> TokenResult<VerifiedToken> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(TokenError::Invalid);
        }

        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(tag_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Invalid);
        };

        let tag = base64_url_decode(tag_b64).map_err(|_| TokenError::Invalid)?;
        if tag.len() != MAC_LEN {
            return Err(TokenError::Invalid);
        }

        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
        if !self.is_authentic(signing_input.as_bytes(), &tag)? {
            return Err(TokenError::Invalid);
        }

        let header: TokenHeader = decode_json_segment(header_b64)?;
        if header.alg != ALGORITHM || header.exp < header.iat {
            return Err(TokenError::Invalid);
        }
        let payload: Payload = decode_json_segment(payload_b64)?;

        let now = self.clock.unix_seconds();
        if now.saturating_sub(header.iat) > header.exp.saturating_sub(header.iat) {
            return Err(TokenError::Expired);
        }

        Ok(VerifiedToken {
            payload,
            issued_at: header.iat,
            expires_at: header.exp,
        })
    }

    fn is_authentic(&self, signing_input: &[u8], tag: &[u8]) -> TokenResult<bool> {
        let mut authentic = hmac_sha256_verify(signing_input, tag, self.key.expose())?;
        for key in &self.fallback_keys {
            authentic |= hmac_sha256_verify(signing_input, tag, key.expose())?;
        }
        Ok(authentic)
    }
}

fn ttl_seconds(ttl: Duration) -> TokenResult<i64> {
    let seconds = ttl.num_seconds();
    if seconds < 1 || ttl.subsec_nanos() != 0 {
        return Err(TokenError::InvalidTtl);
    }
    Ok(seconds)
}

fn decode_json_segment<T: serde::de::DeserializeOwned>(segment: &str) -> TokenResult<T> {
    let bytes = base64_url_decode(segment).map_err(|_| TokenError::Invalid)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Invalid)
}
