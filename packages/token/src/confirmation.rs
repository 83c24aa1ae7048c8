//! Account confirmation tokens
//!
//! Registration signs `{"confirm": <user id>}`; the activation link carries
//! that token back. Whether the account is already active is for the
//! caller to check before acting on a verified id.

use crate::codec::TokenCodec;
use crate::error::{TokenError, TokenResult};
use crate::payload::Payload;
use crate::types::SignedToken;

/// Payload key holding the id of the account being confirmed
pub const CONFIRM_KEY: &str = "confirm";

/// Issue a confirmation token for `user_id` with the codec's default TTL
///
/// # Errors
/// Propagates issuance errors from the codec
pub fn issue_confirmation(codec: &TokenCodec, user_id: i64) -> TokenResult<SignedToken> {
    codec.issue(&Payload::new().with(CONFIRM_KEY, user_id))
}

/// Verify a confirmation token and return the user id it confirms
///
/// # Errors
/// - `TokenError::Invalid` if the token fails verification or carries no
///   integer `confirm` entry
/// - `TokenError::Expired` if the token is authentic but stale
pub fn confirm_user_id(codec: &TokenCodec, token: &str) -> TokenResult<i64> {
    codec
        .verify(token)?
        .get_int(CONFIRM_KEY)
        .ok_or(TokenError::Invalid)
}
