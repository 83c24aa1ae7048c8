//! Reading the requested page number from request input

/// Page assumed when the request does not name a usable page
pub const DEFAULT_PAGE: i64 = 1;

/// Parse a raw page parameter, falling back to page 1.
///
/// Surrounding whitespace is ignored. Out-of-range numbers (zero,
/// negative, past the end) are returned as-is; [`compute`](crate::compute)
/// clamps them.
#[must_use]
pub fn parse_page(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(DEFAULT_PAGE)
}
