//! LRU Cache Metrics
//!
//! Metrics specific to [`LruCache`](crate::LruCache): the core counters plus
//! a snapshot of the cache's current weight and capacity.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Clone, Default)]
pub struct LruCacheMetrics {
    /// Counters common to all caches
    pub core: CoreCacheMetrics,

    /// Total weight of live entries at the time of the snapshot
    pub weight: u64,

    /// Capacity at the time of the snapshot (`u64::MAX` when unbounded)
    pub max_weight: u64,

    /// Number of live entries at the time of the snapshot
    pub entries: u64,
}

impl LruCacheMetrics {
    /// Creates empty metrics for a cache with the given capacity.
    pub fn new(max_weight: u64) -> Self {
        Self {
            max_weight,
            ..Default::default()
        }
    }

    /// Fraction of the capacity in use; 0.0 for an unbounded cache.
    pub fn utilization(&self) -> f64 {
        if self.max_weight == 0 || self.max_weight == u64::MAX {
            0.0
        } else {
            self.weight as f64 / self.max_weight as f64
        }
    }

    /// Converts LRU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("entries".to_string(), self.entries as f64);
        metrics.insert("weight".to_string(), self.weight as f64);
        if self.max_weight != u64::MAX {
            metrics.insert("max_weight".to_string(), self.max_weight as f64);
        }
        metrics.insert("utilization".to_string(), self.utilization());
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
