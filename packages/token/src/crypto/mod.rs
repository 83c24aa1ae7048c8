//! Signing primitives and token segment encoding

pub(crate) mod encoding;
pub(crate) mod hmac_sha256;
