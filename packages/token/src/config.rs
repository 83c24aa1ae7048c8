//! Token codec configuration

use crate::error::{TokenError, TokenResult};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default lifetime of an issued token, in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Default environment variable holding the signing secret
pub const DEFAULT_SECRET_ENV: &str = "STOREFRONT_SECRET_KEY";

/// Settings consumed once when a [`TokenCodec`](crate::TokenCodec) is built
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Environment variable holding the primary signing secret
    #[serde(default = "default_secret_env")]
    pub secret_env: String,
    /// TTL applied when `issue` is called without an explicit TTL
    #[serde(default = "default_ttl_seconds")]
    pub default_ttl_seconds: u64,
    /// Variables holding retired secrets still accepted for verification
    #[serde(default)]
    pub fallback_secret_envs: Vec<String>,
}

fn default_secret_env() -> String {
    DEFAULT_SECRET_ENV.to_string()
}

fn default_ttl_seconds() -> u64 {
    DEFAULT_TTL_SECONDS
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret_env: default_secret_env(),
            default_ttl_seconds: default_ttl_seconds(),
            fallback_secret_envs: Vec::new(),
        }
    }
}

impl TokenConfig {
    /// The configured default TTL
    ///
    /// # Errors
    /// Returns `TokenError::InvalidTtl` when the TTL is zero or does not fit a
    /// signed 64-bit second count
    pub fn default_ttl(&self) -> TokenResult<Duration> {
        let seconds = i64::try_from(self.default_ttl_seconds).map_err(|_| TokenError::InvalidTtl)?;
        if seconds == 0 {
            return Err(TokenError::InvalidTtl);
        }
        Duration::try_seconds(seconds).ok_or(TokenError::InvalidTtl)
    }
}
