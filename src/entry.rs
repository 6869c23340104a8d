//! Cache Entry Type
//!
//! One [`CacheEntry`] exists per live key. Besides the value it carries the
//! bookkeeping the eviction engine needs:
//!
//! - `weight`: what the entry contributes towards the capacity bound,
//!   computed by the weigher when the key is first inserted (and again for
//!   every entry whenever the weigher is replaced)
//! - `use_counter`: logical timestamp of the last insert or touch, which is
//!   also the entry's slot in the recency index
//! - `inserted_at`: clock reading of the last write, used for max-age expiry.
//!   A plain read never refreshes it.
//!
//! # Memory Layout
//!
//! - `value: V` - User's value type
//! - `weight: u64` - 8 bytes
//! - `use_counter: u64` - 8 bytes
//! - `inserted_at: u64` - 8 bytes
//!
//! The key lives in the owning map (and is cloned once into the recency
//! index), so it is not repeated here.

use core::fmt;

/// Per-key record held by the cache.
pub(crate) struct CacheEntry<V> {
    /// The cached value.
    pub(crate) value: V,

    /// Capacity cost of this entry.
    pub(crate) weight: u64,

    /// Slot of this entry in the recency index.
    use_counter: u64,

    /// Clock reading (nanoseconds) of the last write.
    inserted_at: u64,
}

impl<V> CacheEntry<V> {
    #[inline]
    pub(crate) fn new(value: V, weight: u64, use_counter: u64, inserted_at: u64) -> Self {
        Self {
            value,
            weight,
            use_counter,
            inserted_at,
        }
    }

    #[inline]
    pub(crate) fn use_counter(&self) -> u64 {
        self.use_counter
    }

    #[inline]
    pub(crate) fn set_use_counter(&mut self, use_counter: u64) {
        self.use_counter = use_counter;
    }

    #[cfg(test)]
    pub(crate) fn inserted_at(&self) -> u64 {
        self.inserted_at
    }

    /// Replaces the value and restarts the entry's age, returning the old value.
    ///
    /// The weight is left untouched: it is only computed on first insert and
    /// when the weigher changes.
    #[inline]
    pub(crate) fn overwrite(&mut self, value: V, now: u64) -> V {
        self.inserted_at = now;
        core::mem::replace(&mut self.value, value)
    }

    /// Nanoseconds since the last write, as seen at `now`.
    #[inline]
    pub(crate) fn age_nanos(&self, now: u64) -> u64 {
        now.saturating_sub(self.inserted_at)
    }

    /// Whether the entry has outlived `max_age` (strictly older than it).
    ///
    /// `None` means entries never go stale.
    #[inline]
    pub(crate) fn is_stale(&self, now: u64, max_age: Option<u64>) -> bool {
        match max_age {
            Some(max_age) => self.age_nanos(now) > max_age,
            None => false,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for CacheEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("value", &self.value)
            .field("weight", &self.weight)
            .field("use_counter", &self.use_counter)
            .field("inserted_at", &self.inserted_at)
            .finish()
    }
}
