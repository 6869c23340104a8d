//! Time Sources for Age-Based Expiry
//!
//! The cache never asks the operating system for the time directly. Every
//! timestamp it records comes from a [`Clock`].
//!
//! # Provided Clocks
//!
//! | Clock | Availability | Behavior |
//! |-------|--------------|----------|
//! | [`MonotonicClock`] | `std` feature | Nanoseconds elapsed since the clock was created |
//! | [`ManualClock`] | targets with 64-bit atomics | Only moves when told to; clones share the same time |
//!
//! [`DefaultClock`] is `MonotonicClock` when `std` is enabled and `ManualClock`
//! otherwise. In `no_std` builds the default clock therefore never advances on
//! its own, and entries only go stale once the caller drives it forward.
//!
//! # Examples
//!
//! ```
//! use aging_lru::clock::{Clock, ManualClock};
//! use core::time::Duration;
//!
//! let clock = ManualClock::new();
//! let handle = clock.clone();
//! handle.advance(Duration::from_millis(5));
//! assert_eq!(clock.now_nanos(), 5_000_000);
//! ```

extern crate alloc;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

/// A source of monotonically non-decreasing timestamps, in nanoseconds.
///
/// Only differences between two readings are meaningful; the epoch is
/// implementation-defined.
pub trait Clock {
    /// Returns the current time in nanoseconds.
    fn now_nanos(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    #[inline]
    fn now_nanos(&self) -> u64 {
        (**self).now_nanos()
    }
}

/// Converts a duration to whole nanoseconds, saturating at `u64::MAX`.
#[inline]
pub(crate) fn duration_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Wall-clock-independent clock backed by [`std::time::Instant`].
///
/// Readings are nanoseconds since the clock was constructed.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Creates a clock whose zero point is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    #[inline]
    fn now_nanos(&self) -> u64 {
        duration_nanos(self.origin.elapsed())
    }
}

/// A clock that only moves when it is explicitly advanced.
///
/// Clones share one underlying counter, so a test can hand a clone to the
/// cache and keep another to drive time forward.
///
/// The counter is an `Arc<AtomicU64>`, so this clock is only available on
/// targets with 64-bit atomics (`target_has_atomic = "64"`). On other
/// `no_std` targets, implement [`Clock`] for a platform timer instead.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let by = duration_nanos(by);
        let _ = self
            .now
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
                Some(now.saturating_add(by))
            });
    }

    /// Sets the clock to an absolute reading.
    ///
    /// Moving the clock backwards is allowed; entries simply look younger.
    pub fn set_nanos(&self, nanos: u64) {
        self.now.store(nanos, Ordering::Release);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_nanos(&self) -> u64 {
        self.now.load(Ordering::Acquire)
    }
}

/// Clock used when none is supplied.
#[cfg(feature = "std")]
pub type DefaultClock = MonotonicClock;

/// Clock used when none is supplied.
///
/// Without `std` this is [`ManualClock`], which needs 64-bit atomics.
#[cfg(not(feature = "std"))]
pub type DefaultClock = ManualClock;
