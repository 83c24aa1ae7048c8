//! HMAC-SHA256 signing and constant-time verification

use crate::error::{TokenError, TokenResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 tag
pub(crate) const MAC_LEN: usize = 32;

/// Compute HMAC-SHA256 of `data` under `secret`
pub(crate) fn hmac_sha256_sign(data: &[u8], secret: &[u8]) -> TokenResult<[u8; MAC_LEN]> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| TokenError::invalid_key("Invalid HMAC key"))?;
    mac.update(data);
    let mut tag = [0u8; MAC_LEN];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Check `tag` against HMAC-SHA256 of `data` without early exit on mismatch
pub(crate) fn hmac_sha256_verify(data: &[u8], tag: &[u8], secret: &[u8]) -> TokenResult<bool> {
    let expected = hmac_sha256_sign(data, secret)?;
    Ok(expected[..].ct_eq(tag).into())
}
