//! URL-safe base64 without padding (RFC 4648 §5)
//!
//! Decoding is strict: non-canonical trailing bits are an error, so two
//! different segment strings never decode to the same bytes.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
