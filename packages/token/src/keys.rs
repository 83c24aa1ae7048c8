//! Secret key material and the sources it can be loaded from
//!
//! Secrets are resolved once, when a codec is built, and are held in
//! zeroizing buffers for the codec's lifetime.

use crate::error::{TokenError, TokenResult};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt;
use zeroize::Zeroizing;

/// Minimum secret length accepted for HMAC-SHA256 (256 bits)
pub const MIN_SECRET_LEN: usize = 32;

/// Validated HMAC secret, wiped from memory on drop
#[derive(Clone)]
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    /// Wrap raw secret bytes, rejecting secrets shorter than [`MIN_SECRET_LEN`]
    ///
    /// # Errors
    /// Returns `TokenError::InvalidKey` if the secret is too short
    pub fn new(secret: impl Into<Vec<u8>>) -> TokenResult<Self> {
        let bytes: Zeroizing<Vec<u8>> = Zeroizing::new(secret.into());
        validate_hmac_key(&bytes)?;
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn expose(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {} bytes])", self.bytes.len())
    }
}

fn validate_hmac_key(secret: &[u8]) -> TokenResult<()> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(TokenError::invalid_key(&format!(
            "HMAC-SHA256 secret must be at least {} bytes, got {}",
            MIN_SECRET_LEN,
            secret.len()
        )));
    }
    Ok(())
}

/// Something that can produce a secret key
pub trait SecretSource: Send + Sync {
    /// Resolve the secret
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The secret cannot be located
    /// - The resolved secret is too short
    fn resolve(&self) -> TokenResult<SecretKey>;
}

/// Secret supplied directly as bytes
pub struct RawSecret {
    bytes: Zeroizing<Vec<u8>>,
}

impl RawSecret {
    /// Use `bytes` as the secret
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes.into()),
        }
    }
}

impl SecretSource for RawSecret {
    fn resolve(&self) -> TokenResult<SecretKey> {
        SecretKey::new(self.bytes.to_vec())
    }
}

/// Secret read from an environment variable.
///
/// Hex and standard base64 values are decoded when they decode to at least
/// [`MIN_SECRET_LEN`] bytes; any other value is used as its UTF-8 bytes,
/// the way a textual application secret is normally consumed.
pub struct EnvSecret {
    var_name: String,
}

impl EnvSecret {
    /// Read the secret from `var_name`
    #[must_use]
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    /// Name of the variable this source reads
    #[must_use]
    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl SecretSource for EnvSecret {
    fn resolve(&self) -> TokenResult<SecretKey> {
        let value = Zeroizing::new(std::env::var(&self.var_name).map_err(|_| {
            TokenError::invalid_key(&format!("environment variable {} is not set", self.var_name))
        })?);
        decode_secret_text(&value, &self.var_name)
    }
}

fn decode_secret_text(value: &str, origin: &str) -> TokenResult<SecretKey> {
    if let Ok(decoded) = hex::decode(value) {
        if decoded.len() >= MIN_SECRET_LEN {
            tracing::debug!(origin, "using hex-decoded secret");
            return SecretKey::new(decoded);
        }
    }

    if let Ok(decoded) = STANDARD.decode(value) {
        if decoded.len() >= MIN_SECRET_LEN {
            tracing::debug!(origin, "using base64-decoded secret");
            return SecretKey::new(decoded);
        }
    }

    tracing::debug!(origin, "using secret text bytes as-is");
    SecretKey::new(value.as_bytes().to_vec())
}
