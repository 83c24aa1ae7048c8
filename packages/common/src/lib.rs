//! Common infrastructure shared by the storefront core crates
//!
//! This crate provides:
//! - A cloneable error type with kind, context and source propagation
//! - `err!`, `bail!` and `ensure!` macros for kind-tagged errors with formatted context
//! - Logging bootstrap and privacy-preserving log helpers

pub mod error;
pub mod logging;

pub use error::*;
pub use logging::LoggingTransformer;
