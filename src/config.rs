//! Cache Configuration
//!
//! [`LruCacheConfig`] is a plain struct with public fields, built in one
//! expression and handed to [`LruCache::init`](crate::LruCache::init).
//!
//! # Capacity
//!
//! `max` bounds the *total weight* of the cache. With the default weigher
//! every entry weighs 1, so `max` is an entry count; with a custom weigher it
//! is whatever unit the weigher returns (bytes, tokens, rows...).
//!
//! A `max` of `0` means "unbounded". Invalid capacities are never an error:
//! they are coerced to unbounded, both here and in
//! [`LruCache::set_max`](crate::LruCache::set_max).
//!
//! # Age
//!
//! `max_age` enables lazy expiry. An entry whose last write is older than
//! `max_age` is stale: it is discovered on access or enumeration and removed
//! then, never by a background sweep. `allow_stale` decides whether the
//! access that discovers it still gets the old value (exactly once).
//!
//! Weigher and disposal callbacks are not part of the config; attach them with
//! [`LruCache::with_weigher`](crate::LruCache::with_weigher) and
//! [`LruCache::with_dispose`](crate::LruCache::with_dispose).
//!
//! # Examples
//!
//! ```
//! use aging_lru::config::LruCacheConfig;
//! use aging_lru::LruCache;
//! use core::time::Duration;
//!
//! // Up to 1000 entries, each considered fresh for 30 seconds
//! let config = LruCacheConfig {
//!     max: 1000,
//!     max_age: Some(Duration::from_secs(30)),
//!     allow_stale: false,
//! };
//! let cache: LruCache<String, String> = LruCache::init(config, None);
//! assert_eq!(cache.max(), 1000);
//! ```

use core::fmt;
use core::time::Duration;

/// Maximum weight reported by an unbounded cache.
pub const UNBOUNDED: u64 = u64::MAX;

/// Configuration for an [`LruCache`](crate::LruCache).
///
/// # Fields
///
/// - `max`: maximum total weight; `0` means unbounded.
/// - `max_age`: entries older than this are stale; `None` disables expiry.
/// - `allow_stale`: return a stale value once, on the access that evicts it.
///
/// The default configuration is unbounded, never expires, and treats stale
/// entries as absent.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum total weight of live entries. `0` is treated as unbounded.
    pub max: u64,
    /// How long an entry stays fresh after it was last written.
    pub max_age: Option<Duration>,
    /// Whether the access that discovers a stale entry still returns it.
    pub allow_stale: bool,
}

impl LruCacheConfig {
    /// Capacity after coercing `0` to unbounded.
    #[inline]
    pub fn effective_max(&self) -> u64 {
        normalize_max(self.max)
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("max", &self.max)
            .field("max_age", &self.max_age)
            .field("allow_stale", &self.allow_stale)
            .finish()
    }
}

/// Coerces invalid capacities to [`UNBOUNDED`].
#[inline]
pub(crate) fn normalize_max(max: u64) -> u64 {
    if max == 0 {
        UNBOUNDED
    } else {
        max
    }
}
