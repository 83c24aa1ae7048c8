//! Structured logging bootstrap and privacy-preserving helpers
//!
//! Logging is configured through `env_logger`; set `RUST_LOG` to choose
//! levels, e.g. `RUST_LOG=storefront=debug,storefront_token=info`.
//! Helpers here never write raw user identifiers or token material.

use log::{info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the storefront crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once at application startup
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for tests; safe to call repeatedly
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log an authentication or account event
    ///
    /// User identifiers are hashed so entries stay correlatable without
    /// exposing the identifier itself.
    pub fn log_auth_event(event: &str, user_id: Option<&str>, success: bool) {
        if success {
            let user_hash = user_id.map_or_else(|| "anonymous".to_string(), Self::secure_hash_key);
            info!("Authentication succeeded: {event} (user_hash: {user_hash})");
        } else {
            warn!("Authentication failed: {event}");
        }
    }

    /// Log that a presented token was rejected, recording only the reason kind
    pub fn log_token_rejection(operation: &str, reason: &str) {
        warn!("Token rejected: {operation} (reason: {reason})");
    }

    /// Short SHA-256 fingerprint of a sensitive value for log output
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
