//! Timestamp sources for throws and matches.

use core::cell::Cell;

/// Source of millisecond timestamps.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_millis(&self) -> u64;
}

/// Wall clock time in milliseconds since the UNIX epoch.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}

/// A deterministic clock that starts at a fixed time and moves by a fixed step
/// on every reading.
///
/// # Example
///
/// ```
/// use dartrs::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_000).with_step(10);
/// assert_eq!(clock.now_millis(), 1_000);
/// assert_eq!(clock.now_millis(), 1_010);
/// ```
#[derive(Debug)]
pub struct FixedClock {
    next: Cell<u64>,
    step: u64,
}

impl FixedClock {
    /// Creates a clock that always reads `start`.
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self {
            next: Cell::new(start),
            step: 0,
        }
    }

    /// Sets how far the clock moves after each reading.
    #[must_use]
    pub const fn with_step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}
