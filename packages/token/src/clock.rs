//! Time sources for token issuance and expiry checks

use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current wall-clock time in whole unix seconds
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time as seconds since the unix epoch
    fn unix_seconds(&self) -> i64;
}

/// The operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn unix_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock that only moves when told to.
///
/// Shareable across threads; useful for tests and for replaying
/// verification at a fixed instant.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at `unix_seconds`
    #[must_use]
    pub fn new(unix_seconds: i64) -> Self {
        Self {
            now: AtomicI64::new(unix_seconds),
        }
    }

    /// Create a clock frozen at the current system time
    #[must_use]
    pub fn starting_now() -> Self {
        Self::new(SystemClock.unix_seconds())
    }

    /// Move the clock forward by `seconds` (negative values move it back)
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }

    /// Jump to an absolute time
    pub fn set(&self, unix_seconds: i64) {
        self.now.store(unix_seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn unix_seconds(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
