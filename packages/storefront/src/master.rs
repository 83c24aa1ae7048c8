//! Unified entry point

/// Entry point for the storefront core operations.
///
/// Errors are converted into the shared [`Error`](crate::Error) so a
/// request handler can propagate any of them with `?`.
pub struct Storefront;

impl Storefront {
    /// Build a token codec from configuration
    ///
    /// # Errors
    /// Returns a `Configuration` error if a secret is missing or too short,
    /// or the TTL is zero
    #[cfg(feature = "token")]
    pub fn tokens(config: &storefront_token::TokenConfig) -> crate::Result<storefront_token::TokenCodec> {
        storefront_token::TokenCodec::from_config(config)
            .map_err(|e| crate::Error::from(e).context("building token codec from configuration"))
    }

    /// Page-number links for page `current_page` of `total_pages`
    ///
    /// # Errors
    /// Returns a `Validation` error if `total_pages` is 0
    #[cfg(feature = "pagination")]
    pub fn page_window(
        total_pages: u32,
        current_page: i64,
    ) -> crate::Result<storefront_pagination::PageWindow> {
        Ok(storefront_pagination::compute(total_pages, current_page)?)
    }

    /// Page-number links for a raw page request parameter
    ///
    /// # Errors
    /// Returns a `Validation` error if `total_pages` is 0
    #[cfg(feature = "pagination")]
    pub fn page_window_for_request(
        total_pages: u32,
        raw_page: &str,
    ) -> crate::Result<storefront_pagination::PageWindow> {
        Self::page_window(total_pages, storefront_pagination::parse_page(raw_page))
    }
}
