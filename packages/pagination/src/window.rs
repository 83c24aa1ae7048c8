//! Sliding window of page-number links

use crate::error::{PaginationError, PaginationResult};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::RangeInclusive;

/// Maximum number of page links shown at once
pub const WINDOW_SIZE: u32 = 5;

/// Pages shown on each side of the current page in the middle of a range
pub const RADIUS: u32 = 2;

/// Consecutive page numbers to render as navigation links.
///
/// Always non-empty, strictly increasing, within `[1, total_pages]`, and
/// at most [`WINDOW_SIZE`] long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    first: u32,
    last: u32,
    current: u32,
    total_pages: u32,
}

/// Compute which page numbers to link to.
///
/// `current_page` is clamped into `[1, total_pages]` first. Then, in order:
///
/// 1. fewer than five pages: all of them
/// 2. current within the first three: pages 1 to 5
/// 3. current within two of the end: the last five pages
/// 4. otherwise: two pages either side of current
///
/// # Errors
/// Returns `PaginationError::InvalidInput` if `total_pages` is 0
pub fn compute(total_pages: u32, current_page: i64) -> PaginationResult<PageWindow> {
    if total_pages < 1 {
        return Err(PaginationError::InvalidInput { total_pages });
    }

    let current = clamp_page(current_page, total_pages);

    let (first, last) = if total_pages < WINDOW_SIZE {
        (1, total_pages)
    } else if current <= RADIUS + 1 {
        (1, WINDOW_SIZE)
    } else if total_pages - current <= RADIUS {
        (total_pages - (WINDOW_SIZE - 1), total_pages)
    } else {
        (current - RADIUS, current + RADIUS)
    };

    Ok(PageWindow {
        first,
        last,
        current,
        total_pages,
    })
}

fn clamp_page(page: i64, total_pages: u32) -> u32 {
    let clamped = page.clamp(1, i64::from(total_pages));
    u32::try_from(clamped).unwrap_or(total_pages)
}

impl PageWindow {
    /// The page numbers as an inclusive range
    #[must_use]
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    /// Iterate page numbers in ascending order
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.pages()
    }

    /// Page numbers collected into a vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.pages().collect()
    }

    /// Number of page links
    #[must_use]
    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    /// A window is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `page` has a link in this window
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        self.pages().contains(&page)
    }

    /// The current page after clamping
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Total number of pages in the collection
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether a page precedes the current one
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether a page follows the current one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// The page before the current one
    #[must_use]
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    /// The page after the current one
    #[must_use]
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }
}

impl IntoIterator for PageWindow {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

impl IntoIterator for &PageWindow {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

// Shaped for template contexts: the page list plus navigation flags.
impl Serialize for PageWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageWindow", 7)?;
        state.serialize_field("pages", &self.to_vec())?;
        state.serialize_field("current", &self.current)?;
        state.serialize_field("total_pages", &self.total_pages)?;
        state.serialize_field("has_previous", &self.has_previous())?;
        state.serialize_field("has_next", &self.has_next())?;
        state.serialize_field("previous", &self.previous())?;
        state.serialize_field("next", &self.next())?;
        state.end()
    }
}
