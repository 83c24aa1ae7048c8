//! Error handling with context propagation
//!
//! Provides the unified error used at crate boundaries:
//! - Structured error kinds with thiserror
//! - Context attachment and source chaining
//! - Backtrace capture behind the `full-backtrace` feature

pub mod constructors;
pub mod display;
pub mod macros;
pub mod types;

pub use types::{Error, ErrorKind, Result};
