//! Windowed pagination
//!
//! Decides which page numbers to show as navigation links for a paginated
//! collection: at most five, sliding with the current page and pinned to
//! either end near the boundaries. Counting pages and slicing the
//! underlying collection are left to the query layer.
//!
//! ```
//! use storefront_pagination::{compute, parse_page};
//!
//! let window = compute(10, parse_page("5")).expect("10 pages is valid");
//! assert_eq!(window.to_vec(), vec![3, 4, 5, 6, 7]);
//! assert_eq!(window.next(), Some(6));
//! ```

mod error;
pub mod request;
pub mod window;

pub use error::{PaginationError, PaginationResult};
pub use request::parse_page;
pub use window::{PageWindow, RADIUS, WINDOW_SIZE, compute};
