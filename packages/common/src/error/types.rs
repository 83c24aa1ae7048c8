//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Misconfigured secret key, TTL or other construction input
    #[error("Configuration error")]
    Configuration,

    /// Caller supplied input that violates an operation's contract
    #[error("Validation error")]
    Validation,

    /// A presented credential was rejected
    #[error("Permission denied")]
    PermissionDenied,

    /// Serialization or encoding failure
    #[error("Serialization error")]
    Serialization,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
