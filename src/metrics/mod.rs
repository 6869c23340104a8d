//! Cache Metrics System
//!
//! Counters describing how a cache has been used, reported as a
//! `BTreeMap<String, f64>` through the [`CacheMetrics`] trait.
//!
//! # Ordering
//!
//! Metrics are reported in alphabetical key order, so two snapshots of the
//! same cache state produce identical maps.
//!
//! # Where Entries Go
//!
//! Every entry that leaves the cache is counted exactly once, under the reason
//! it left:
//!
//! | Counter | Cause |
//! |---------|-------|
//! | `evictions` | capacity trim (insert, `set_max`, weigher change) |
//! | `expirations` | found stale on access, enumeration or prune |
//! | `removals` | explicit `remove` or `pop` |
//! | `rejections` | a new entry heavier than the whole capacity |
//! | `resets` | number of `reset` calls (entries dropped are not counted) |

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Usage counters kept by the cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Lookups made through `get`/`peek`.
    pub requests: u64,

    /// Lookups that found a fresh entry.
    pub cache_hits: u64,

    /// Lookups that found a stale entry and still returned it.
    pub stale_hits: u64,

    /// Sum of weights served by hits (fresh and stale), saturating.
    pub weight_served: u64,

    /// Sum of weights of every entry admitted by `set`, saturating.
    pub weight_written: u64,

    /// Entries admitted by `set` on a new key.
    pub insertions: u64,

    /// Values replaced by `set` on an existing key.
    pub overwrites: u64,

    /// Entries dropped by the capacity trim.
    pub evictions: u64,

    /// Entries dropped because they outlived the max age.
    pub expirations: u64,

    /// Entries taken out by `remove` or `pop`.
    pub removals: u64,

    /// New entries refused for weighing more than the capacity.
    pub rejections: u64,

    /// Calls to `reset`.
    pub resets: u64,
}

impl CoreCacheMetrics {
    /// Creates an all-zero set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found a fresh entry of the given weight.
    pub fn record_hit(&mut self, weight: u64) {
        self.requests += 1;
        self.cache_hits += 1;
        self.weight_served = self.weight_served.saturating_add(weight);
    }

    /// Records a lookup that returned a stale entry one last time.
    pub fn record_stale_hit(&mut self, weight: u64) {
        self.requests += 1;
        self.stale_hits += 1;
        self.weight_served = self.weight_served.saturating_add(weight);
    }

    /// Records a lookup that returned nothing.
    ///
    /// Misses are derived as `requests - cache_hits - stale_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new entry admitted into the cache.
    pub fn record_insertion(&mut self, weight: u64) {
        self.insertions += 1;
        self.weight_written = self.weight_written.saturating_add(weight);
    }

    /// Records a value replaced in place.
    pub fn record_overwrite(&mut self) {
        self.overwrites += 1;
    }

    /// Records an entry dropped by the capacity trim.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an entry dropped for being stale.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Records an entry removed on request.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Records a refused insert.
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    /// Records a reset.
    pub fn record_reset(&mut self) {
        self.resets += 1;
    }

    /// Lookups that returned nothing.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits - self.stale_hits
    }

    /// Fraction of lookups that found a fresh entry, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that returned nothing, or 0.0 before any lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Lookups
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("stale_hits".to_string(), self.stale_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        // Writes
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("overwrites".to_string(), self.overwrites as f64);
        metrics.insert("weight_served".to_string(), self.weight_served as f64);
        metrics.insert("weight_written".to_string(), self.weight_written as f64);

        // Departures
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("expirations".to_string(), self.expirations as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("rejections".to_string(), self.rejections as f64);
        metrics.insert("resets".to_string(), self.resets as f64);

        metrics
    }
}

/// Uniform metrics reporting for caches.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}
