#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## How Eviction Order Is Tracked
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                              LruCache                                │
//! │                                                                      │
//! │   key → entry map                    recency index (use counter → key)│
//! │  ┌──────────────────────┐           ┌───┬───┬───┬───┬───┬───┬───┐    │
//! │  │ "a" → value, w=1, #0 │◀──────────│#0 │   │#2 │   │   │#5 │#6 │    │
//! │  │ "c" → value, w=3, #2 │◀──────────│ a │   │ c │   │   │ b │ d │    │
//! │  │ "b" → value, w=2, #5 │◀──────────└───┴───┴───┴───┴───┴───┴───┘    │
//! │  │ "d" → value, w=4, #6 │             ▲                       ▲      │
//! │  └──────────────────────┘           oldest                  newest   │
//! │                                   (evicted first)                    │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every insert or access files the key under the next use counter. The
//! trim pops from `oldest` until the total weight fits the maximum.
//!
//! ## Quick Reference
//!
//! | Operation | Method | Notes |
//! |-----------|--------|-------|
//! | insert / overwrite | [`LruCache::set`] | `false` when a new entry alone exceeds the maximum |
//! | read and bump | [`LruCache::get`] | stale entries are removed on discovery |
//! | read without bump | [`LruCache::peek`] | same staleness handling as `get` |
//! | membership | [`LruCache::contains_key`] | never mutates |
//! | delete | [`LruCache::remove`] | no-op for absent keys |
//! | take LRU entry | [`LruCache::pop`] | bypasses the disposer |
//! | empty | [`LruCache::reset`] | disposes everything, restarts counters |
//! | enumerate | [`LruCache::iter`], [`LruCache::keys`], [`LruCache::values`] | most recent first |
//! | capacity | [`LruCache::max`], [`LruCache::set_max`] | `0` means unbounded |
//! | weighing | [`LruCache::set_weigher`], [`LruCache::reset_weigher`] | re-weighs every entry |
//!
//! ## Count-Based Capacity
//!
//! ```rust
//! use aging_lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.set("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Weighted Capacity
//!
//! ```rust
//! use aging_lru::LruCache;
//!
//! let mut cache = LruCache::new(1024).with_weigher(|blob: &Vec<u8>| blob.len() as u64);
//! cache.set("small", vec![0u8; 100]);
//! cache.set("large", vec![0u8; 900]);
//! assert_eq!(cache.length(), 1000);
//!
//! // A single value larger than the whole cache is refused
//! assert!(!cache.set("huge", vec![0u8; 4096]));
//! assert_eq!(cache.length(), 1000);
//! ```
//!
//! ## Max Age
//!
//! ```rust
//! use aging_lru::clock::ManualClock;
//! use aging_lru::config::LruCacheConfig;
//! use aging_lru::{DefaultHashBuilder, LruCache};
//! use core::time::Duration;
//!
//! let clock = ManualClock::new();
//! let config = LruCacheConfig {
//!     max: 100,
//!     max_age: Some(Duration::from_secs(2)),
//!     allow_stale: true,
//! };
//! let mut cache: LruCache<&str, &str, DefaultHashBuilder, ManualClock> =
//!     LruCache::init_with_clock(config, None, clock.clone());
//!
//! cache.set("session", "token");
//! clock.advance(Duration::from_secs(3));
//!
//! assert!(!cache.contains_key(&"session"));
//! assert_eq!(cache.get(&"session"), Some("token")); // stale, served once
//! assert_eq!(cache.get(&"session"), None);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the cache and its iterators
//! - [`config`]: configuration structure
//! - [`clock`]: time sources used for max-age expiry
//! - [`metrics`]: metrics collection for cache monitoring

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown"), test))]
extern crate std;

/// Per-key entry record (value, weight, use counter, insertion time).
pub(crate) mod entry;

/// Sparse use-counter index that orders keys by recency.
pub(crate) mod index;

/// Time sources for age-based expiry.
pub mod clock;

/// Cache configuration structure.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a weight-bounded cache that evicts the least recently used
/// entries when the bound is exceeded and expires entries past a max age.
pub mod lru;

/// Cache metrics system.
///
/// Provides counters for lookups, writes and every way an entry can leave
/// the cache, reported through the [`metrics::CacheMetrics`] trait.
pub mod metrics;

pub use clock::{Clock, DefaultClock, ManualClock};
#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use config::LruCacheConfig;
pub use lru::{DefaultHashBuilder, Iter, Keys, LruCache, Values};
pub use metrics::{CacheMetrics, LruCacheMetrics};
