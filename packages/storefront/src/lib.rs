//! # Storefront core
//!
//! The two pieces of self-contained logic a storefront needs outside its
//! ORM and templates:
//!
//! - `token`: stateless, HMAC-signed, expiring tokens for one-time actions
//!   such as confirming an email address, plus the account
//!   [`activation`] flow built on them
//! - `pagination`: which page-number links to show for a paginated list
//!
//! Both are enabled by default; disable default features and pick one to
//! trim dependencies:
//!
//! ```toml
//! [dependencies]
//! storefront = { version = "0.1", default-features = false, features = ["pagination"] }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use storefront::{Activation, Storefront, TokenCodec};
//! use chrono::Duration;
//!
//! # fn main() -> storefront::Result<()> {
//! let codec = TokenCodec::new(*b"replace with a real 32+ byte key", Duration::hours(1))?;
//! let activation = Activation::new(codec, "https://shop.example.com/");
//!
//! let link = activation.link_for(42)?;
//! assert!(link.url().starts_with("https://shop.example.com/user/active/"));
//! assert_eq!(activation.activate(link.token().as_str()), Ok(42));
//!
//! let window = Storefront::page_window(10, 9)?;
//! assert_eq!(window.to_vec(), vec![6, 7, 8, 9, 10]);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "token")]
pub mod activation;
mod master;

pub use master::Storefront;

pub use storefront_common::*;

#[cfg(feature = "token")]
#[cfg_attr(docsrs, doc(cfg(feature = "token")))]
pub use activation::{Activation, ActivationError, ActivationLink};

#[cfg(feature = "token")]
#[cfg_attr(docsrs, doc(cfg(feature = "token")))]
pub use storefront_token::{
    Clock, MAX_TOKEN_LEN, ManualClock, Payload, Scalar, SignedToken, SystemClock, TokenCodec, TokenConfig,
    TokenError, VerifiedToken,
};

#[cfg(feature = "pagination")]
#[cfg_attr(docsrs, doc(cfg(feature = "pagination")))]
pub use storefront_pagination::{PageWindow, PaginationError, parse_page};
