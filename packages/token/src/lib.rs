//! Stateless, integrity-protected, time-bounded tokens
//!
//! A [`TokenCodec`] signs a small [`Payload`] together with its issuance
//! and expiry times using HMAC-SHA256, producing a URL-safe
//! [`SignedToken`]. Verification needs only the token, the secret and
//! the clock; nothing is stored server-side.
//!
//! ```
//! use chrono::Duration;
//! use storefront_token::{Payload, TokenCodec};
//!
//! # fn main() -> Result<(), storefront_token::TokenError> {
//! let codec = TokenCodec::new(*b"an example secret of 32+ bytes!!", Duration::hours(1))?;
//! let token = codec.issue(&Payload::new().with("confirm", 42))?;
//! let payload = codec.verify(token.as_str())?;
//! assert_eq!(payload.get_int("confirm"), Some(42));
//! # Ok(())
//! # }
//! ```

pub mod clock;
mod codec;
pub mod config;
pub mod confirmation;
pub(crate) mod crypto;
mod error;
pub mod keys;
mod payload;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{MAX_TOKEN_LEN, TokenCodec};
pub use config::TokenConfig;
pub use confirmation::{confirm_user_id, issue_confirmation};
pub use error::{TokenError, TokenResult};
pub use keys::{EnvSecret, RawSecret, SecretKey, SecretSource};
pub use payload::{Payload, Scalar};
pub use types::{SignedToken, VerifiedToken};
