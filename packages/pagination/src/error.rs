//! Pagination error types

use thiserror::Error;

/// Pagination operation result type
pub type PaginationResult<T> = Result<T, PaginationError>;

/// Errors from page window computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A collection must have at least one page to paginate
    #[error("total_pages must be at least 1, got {total_pages}")]
    InvalidInput {
        /// The rejected page count
        total_pages: u32,
    },
}

impl From<PaginationError> for storefront_common::Error {
    fn from(error: PaginationError) -> Self {
        storefront_common::Error::with_source(storefront_common::ErrorKind::Validation, error)
    }
}
