//! Account activation by emailed link
//!
//! Registration issues a confirmation token for the new account and mails
//! a link of the form `<base_url>/user/active/<token>`. Following the link
//! verifies the token and yields the account id to activate.
//!
//! Tokens are not single-use by themselves: check that the account is not
//! already active before acting on the returned id.

use std::fmt;
use storefront_common::LoggingTransformer;
use storefront_token::{SignedToken, TokenCodec, TokenError, TokenResult};
use thiserror::Error;

/// Path segment under which activation tokens are served
pub const ACTIVATION_PATH: &str = "user/active";

/// Why an activation link was refused.
///
/// The messages are safe to show to the person who clicked the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// Authentic link past its lifetime; a new one can be sent
    #[error("The activation link is expired.")]
    Expired,
    /// Anything else: malformed, altered or not issued by us
    #[error("The activation link is invalid.")]
    Invalid,
}

impl ActivationError {
    /// Whether the user should be offered a fresh link
    #[must_use]
    pub fn offers_resend(&self) -> bool {
        matches!(self, ActivationError::Expired)
    }
}

impl From<TokenError> for ActivationError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => ActivationError::Expired,
            _ => ActivationError::Invalid,
        }
    }
}

/// A token together with the URL that carries it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationLink {
    token: SignedToken,
    url: String,
}

impl ActivationLink {
    /// The signed token
    #[must_use]
    pub fn token(&self) -> &SignedToken {
        &self.token
    }

    /// The full activation URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Take the URL, e.g. for an email body
    #[must_use]
    pub fn into_url(self) -> String {
        self.url
    }
}

impl fmt::Display for ActivationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Issues activation links and checks them when followed
#[derive(Debug, Clone)]
pub struct Activation {
    codec: TokenCodec,
    base_url: String,
}

impl Activation {
    /// Serve links under `base_url` (a trailing `/` is ignored)
    #[must_use]
    pub fn new(codec: TokenCodec, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { codec, base_url }
    }

    /// The codec used to sign and check tokens
    #[must_use]
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Build the activation link for a newly registered account
    ///
    /// # Errors
    /// Propagates token issuance errors
    pub fn link_for(&self, user_id: i64) -> TokenResult<ActivationLink> {
        let token = storefront_token::issue_confirmation(&self.codec, user_id)?;
        let url = format!("{}/{ACTIVATION_PATH}/{token}", self.base_url);
        LoggingTransformer::log_auth_event("activation link issued", Some(&user_id.to_string()), true);
        Ok(ActivationLink { token, url })
    }

    /// Check a followed link's token and return the account id to activate
    ///
    /// # Errors
    /// - `ActivationError::Expired` if the link outlived its TTL
    /// - `ActivationError::Invalid` for any other verification failure
    pub fn activate(&self, token: &str) -> Result<i64, ActivationError> {
        match storefront_token::confirm_user_id(&self.codec, token) {
            Ok(user_id) => {
                LoggingTransformer::log_auth_event("account activation", Some(&user_id.to_string()), true);
                Ok(user_id)
            }
            Err(error) => {
                let error = ActivationError::from(error);
                let reason = if error.offers_resend() { "expired" } else { "invalid" };
                LoggingTransformer::log_token_rejection("account activation", reason);
                Err(error)
            }
        }
    }
}
