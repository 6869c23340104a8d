//! Least Recently Used (LRU) Cache Implementation
//!
//! A bounded cache that evicts the least recently used entries once the total
//! weight of its entries exceeds the configured maximum, and that can expire
//! entries lazily once they outlive a maximum age.
//!
//! # Algorithm
//!
//! Entries live in a hash map. Recency is tracked by a [`RecencyIndex`]: a
//! sparse map from an ever-increasing use counter to the key last touched at
//! that counter. Touching an entry vacates its old slot and files it under the
//! next counter, so the entry with the smallest occupied counter is the least
//! recently used one. The index keeps a cursor on that slot, which is what the
//! capacity trim and [`LruCache::pop`] consume.
//!
//! # Weights
//!
//! Each entry has a weight, computed by the weigher when the key is first
//! inserted (the default weigher returns 1, so the bound is an entry count).
//! [`LruCache::length`] is the sum of live weights and never exceeds
//! [`LruCache::max`] between operations. A new entry that alone weighs more
//! than the maximum is refused: the disposer sees it and `set` returns `false`.
//!
//! # Staleness
//!
//! With a max age configured, an entry whose last write is older than the max
//! age is stale. Staleness is only ever discovered by an access:
//!
//! - [`LruCache::get`] / [`LruCache::peek`] / iteration remove the stale entry
//!   and notify the disposer. With `allow_stale` the value is returned one last
//!   time; otherwise the key reads as absent.
//! - [`LruCache::contains_key`] reports a stale entry as absent but leaves it in
//!   place.
//!
//! # Disposal
//!
//! The disposer is called with the key and value of every entry that leaves
//! the cache, whatever the reason: [`LruCache::remove`], the capacity trim,
//! expiry, [`LruCache::reset`], the old value of an overwrite, and a refused
//! insert. [`LruCache::pop`] is the one exception: it hands the entry to the
//! caller instead.
//!
//! The entry is unlinked from the cache before the disposer runs. A panicking
//! disposer is not caught; it unwinds out of the operation that invoked it.
//!
//! # Performance Characteristics
//!
//! - `set`, `get`, `peek`, `contains_key`, `remove`: O(1) average
//! - trim and `pop`: O(1) amortized per entry removed
//! - replacing the weigher: O(n)
//! - full iteration: O(n + vacated slots between the oldest and newest entry)
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. The cache is `Send` when its key,
//! value, hasher and clock are, so it can be shared behind a `Mutex` (or any
//! other lock) that serialises every call.

extern crate alloc;

use crate::clock::{duration_nanos, Clock, DefaultClock};
use crate::config::{normalize_max, LruCacheConfig, UNBOUNDED};
use crate::entry::CacheEntry;
use crate::index::RecencyIndex;
use crate::metrics::{CacheMetrics, CoreCacheMetrics, LruCacheMetrics};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::time::Duration;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
pub use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

type Weigher<V> = Box<dyn Fn(&V) -> u64 + Send>;
type Disposer<K, V> = Box<dyn FnMut(&K, &V) + Send>;

/// Weight of `value` under `weigher`; every value weighs 1 without one.
#[inline]
fn weigh<V>(weigher: Option<&Weigher<V>>, value: &V) -> u64 {
    weigher.map_or(1, |weigher| weigher(value))
}

/// A zero max age disables expiry, like `None`.
#[inline]
fn normalize_max_age(max_age: Option<Duration>) -> Option<Duration> {
    max_age.filter(|age| !age.is_zero())
}

/// A bounded, weighted LRU cache with lazy max-age expiry.
///
/// # Examples
///
/// ```
/// use aging_lru::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// cache.set("apple", 1);
/// cache.set("banana", 2);
///
/// // Accessing an entry makes it the most recently used
/// assert_eq!(cache.get(&"apple"), Some(1));
///
/// // Going over capacity evicts the least recently used entry
/// cache.set("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(1));
/// assert_eq!(cache.get(&"cherry"), Some(3));
/// ```
///
/// Weighted capacity with a disposer:
///
/// ```
/// use aging_lru::LruCache;
/// use std::sync::{Arc, Mutex};
///
/// let disposed = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&disposed);
///
/// let mut cache = LruCache::new(8)
///     .with_weigher(|value: &String| value.len() as u64)
///     .with_dispose(move |key: &&str, _value: &String| sink.lock().unwrap().push(key.to_string()));
///
/// cache.set("a", "a".to_string());
/// cache.set("b", "bb".to_string());
/// cache.set("c", "ccc".to_string());
/// cache.set("d", "dddd".to_string());
///
/// assert_eq!(cache.length(), 7);
/// assert_eq!(*disposed.lock().unwrap(), ["a", "b"]);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder, C = DefaultClock> {
    max: u64,
    max_age: Option<Duration>,
    max_age_nanos: Option<u64>,
    allow_stale: bool,
    map: HashMap<K, CacheEntry<V>, S>,
    index: RecencyIndex<K>,
    /// Sum of the weights of every entry in `map`. Wider than a single
    /// weight so the sum of any number of `u64` weights fits.
    length: u128,
    weigher: Option<Weigher<V>>,
    dispose: Option<Disposer<K, V>>,
    clock: C,
    metrics: CoreCacheMetrics,
}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V> {
    /// Creates a count-bounded cache holding at most `max` entries.
    ///
    /// A `max` of `0` creates an unbounded cache.
    pub fn new(max: u64) -> Self {
        let config = LruCacheConfig {
            max,
            ..LruCacheConfig::default()
        };
        Self::init(config, None)
    }
}

impl<K, V, S, C> LruCache<K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
    C: Clock + Default,
{
    /// Creates a cache from a configuration, using the default clock.
    ///
    /// `hasher` defaults to `S::default()`.
    pub fn init(config: LruCacheConfig, hasher: Option<S>) -> Self {
        Self::init_with_clock(config, hasher, C::default())
    }
}

impl<K, V, S, C> LruCache<K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
    C: Clock,
{
    /// Creates a cache from a configuration, reading time from `clock`.
    ///
    /// ```
    /// use aging_lru::clock::ManualClock;
    /// use aging_lru::config::LruCacheConfig;
    /// use aging_lru::{DefaultHashBuilder, LruCache};
    /// use core::time::Duration;
    ///
    /// let clock = ManualClock::new();
    /// let config = LruCacheConfig {
    ///     max: 10,
    ///     max_age: Some(Duration::from_secs(1)),
    ///     allow_stale: false,
    /// };
    /// let mut cache: LruCache<&str, i32, DefaultHashBuilder, ManualClock> =
    ///     LruCache::init_with_clock(config, None, clock.clone());
    ///
    /// cache.set("k", 1);
    /// clock.advance(Duration::from_secs(2));
    /// assert_eq!(cache.get(&"k"), None);
    /// ```
    pub fn init_with_clock(config: LruCacheConfig, hasher: Option<S>, clock: C) -> Self {
        let max_age = normalize_max_age(config.max_age);
        LruCache {
            max: config.effective_max(),
            max_age,
            max_age_nanos: max_age.map(duration_nanos),
            allow_stale: config.allow_stale,
            map: HashMap::with_hasher(hasher.unwrap_or_default()),
            index: RecencyIndex::new(),
            length: 0,
            weigher: None,
            dispose: None,
            clock,
            metrics: CoreCacheMetrics::new(),
        }
    }
}

impl<K, V, S, C> LruCache<K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
    /// Attaches a weigher, consuming and returning the cache.
    ///
    /// See [`LruCache::set_weigher`].
    pub fn with_weigher<F>(mut self, weigher: F) -> Self
    where
        F: Fn(&V) -> u64 + Send + 'static,
    {
        self.set_weigher(weigher);
        self
    }

    /// Attaches a disposer, consuming and returning the cache.
    ///
    /// See [`LruCache::set_dispose`].
    pub fn with_dispose<F>(mut self, dispose: F) -> Self
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.set_dispose(dispose);
        self
    }

    /// Total weight of the live entries, saturating at `u64::MAX`.
    #[inline]
    pub fn length(&self) -> u64 {
        u64::try_from(self.length).unwrap_or(u64::MAX)
    }

    /// Number of live entries, stale-but-undiscovered ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum total weight; `u64::MAX` when unbounded.
    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Returns `false` if the cache has no capacity bound.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.max != UNBOUNDED
    }

    /// Changes the maximum total weight.
    ///
    /// `0` is coerced to unbounded. Lowering the maximum below the current
    /// length evicts least recently used entries until the cache fits.
    pub fn set_max(&mut self, max: u64) {
        self.max = normalize_max(max);
        debug!(max = self.max, length = self.length(), "cache capacity changed");
        if self.over_capacity() {
            self.trim();
        }
    }

    /// Current max age, if expiry is enabled.
    #[inline]
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    /// Changes the max age. `None` or a zero duration disables expiry.
    ///
    /// Enabling or shortening the max age immediately drops the entries that
    /// are stale under the new limit, as [`LruCache::prune`] does.
    pub fn set_max_age(&mut self, max_age: Option<Duration>) {
        let max_age = normalize_max_age(max_age);
        let tightened = match (self.max_age, max_age) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(old), Some(new)) => new < old,
        };
        self.max_age = max_age;
        self.max_age_nanos = max_age.map(duration_nanos);
        debug!(max_age = ?self.max_age, "cache max age changed");
        if tightened {
            self.prune();
        }
    }

    /// Whether a stale entry is returned once by the access that finds it.
    #[inline]
    pub fn allow_stale(&self) -> bool {
        self.allow_stale
    }

    /// Changes whether stale entries are returned once before removal.
    #[inline]
    pub fn set_allow_stale(&mut self, allow_stale: bool) {
        self.allow_stale = allow_stale;
    }

    /// The clock the cache reads time from.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Weight the current weigher assigns to `value`.
    #[inline]
    pub fn weight_of(&self, value: &V) -> u64 {
        weigh(self.weigher.as_ref(), value)
    }

    /// Replaces the weigher and re-weighs every live entry.
    ///
    /// If the new total exceeds the maximum, least recently used entries are
    /// evicted until it fits.
    pub fn set_weigher<F>(&mut self, weigher: F)
    where
        F: Fn(&V) -> u64 + Send + 'static,
    {
        self.weigher = Some(Box::new(weigher));
        self.reweigh();
    }

    /// Goes back to weighing every entry as 1 and re-weighs every live entry.
    pub fn reset_weigher(&mut self) {
        self.weigher = None;
        self.reweigh();
    }

    /// Replaces the disposal callback.
    pub fn set_dispose<F>(&mut self, dispose: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.dispose = Some(Box::new(dispose));
    }

    /// Removes the disposal callback.
    pub fn clear_dispose(&mut self) {
        self.dispose = None;
    }

    /// Inserts or overwrites `key`.
    ///
    /// Overwriting hands the old value to the disposer, restarts the entry's
    /// age and makes it the most recently used; its weight is kept. A new key
    /// is weighed first: if it alone is heavier than the maximum it is handed
    /// to the disposer and `false` is returned. Otherwise the entry is admitted
    /// and the least recently used entries are evicted until the cache fits.
    pub fn set(&mut self, key: K, value: V) -> bool {
        let now = self.clock.now_nanos();

        if let Some(entry) = self.map.get_mut(&key) {
            let old = entry.overwrite(value, now);
            if let Some(counter) = self.index.touch(entry.use_counter()) {
                entry.set_use_counter(counter);
            }
            self.metrics.record_overwrite();
            self.dispose_entry(&key, &old);
            return true;
        }

        let weight = weigh(self.weigher.as_ref(), &value);
        if weight > self.max {
            debug!(
                weight,
                max = self.max,
                "rejected entry heavier than the cache capacity"
            );
            self.metrics.record_rejection();
            self.dispose_entry(&key, &value);
            return false;
        }

        let counter = self.index.push(key.clone());
        self.map
            .insert(key, CacheEntry::new(value, weight, counter, now));
        self.length += u128::from(weight);
        self.metrics.record_insertion(weight);

        if self.over_capacity() {
            self.trim();
        }
        true
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A stale entry is removed; its value is returned this once if
    /// `allow_stale` is set, otherwise `None` is.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_with(key, true)
    }

    /// Returns the value for `key` without changing the eviction order.
    ///
    /// Staleness is handled exactly as in [`LruCache::get`].
    #[inline]
    pub fn peek<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_with(key, false)
    }

    /// Looks `key` up, bumping its recency only when `touch` is `true`.
    pub fn get_with<Q>(&mut self, key: &Q, touch: bool) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let now = self.clock.now_nanos();
        let stale = match self.map.get(key) {
            Some(entry) => entry.is_stale(now, self.max_age_nanos),
            None => {
                self.metrics.record_miss();
                return None;
            }
        };

        if stale {
            let (_, entry) = self.expire(key)?;
            return if self.allow_stale {
                self.metrics.record_stale_hit(entry.weight);
                Some(entry.value)
            } else {
                self.metrics.record_miss();
                None
            };
        }

        let entry = self.map.get_mut(key)?;
        if touch {
            if let Some(counter) = self.index.touch(entry.use_counter()) {
                entry.set_use_counter(counter);
            }
        }
        self.metrics.record_hit(entry.weight);
        Some(entry.value.clone())
    }

    /// Returns `true` if `key` maps to an entry that is not stale.
    ///
    /// This is a pure query: a stale entry is reported as absent but is not
    /// removed, and recency is untouched.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let now = self.clock.now_nanos();
        self.map
            .get(key)
            .is_some_and(|entry| !entry.is_stale(now, self.max_age_nanos))
    }

    /// Removes `key`, handing its entry to the disposer.
    ///
    /// Removing an absent key does nothing.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if let Some((key, entry)) = self.unlink(key) {
            self.metrics.record_removal();
            trace!(weight = entry.weight, "removed entry");
            self.dispose_entry(&key, &entry.value);
        }
    }

    /// Removes and returns the least recently used entry.
    ///
    /// The entry is handed to the caller, so the disposer is not called.
    /// Age is not considered: a stale entry can be popped.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let (key, entry) = self.take_lru()?;
        self.metrics.record_removal();
        Some((key, entry.value))
    }

    /// Drops every stale entry, handing each to the disposer.
    ///
    /// Returns the number of entries dropped. Does nothing without a max age.
    pub fn prune(&mut self) -> usize {
        let Some(max_age) = self.max_age_nanos else {
            return 0;
        };
        let now = self.clock.now_nanos();

        // Each entry is fully unlinked before its disposer runs.
        let stale: Vec<K> = self
            .map
            .iter()
            .filter(|(_, entry)| entry.is_stale(now, Some(max_age)))
            .map(|(key, _)| key.clone())
            .collect();

        let mut pruned = 0;
        for key in &stale {
            if self.expire(key).is_some() {
                pruned += 1;
            }
        }

        debug!(pruned, length = self.length(), "pruned stale entries");
        pruned
    }

    /// Empties the cache, handing every entry to the disposer, and restarts
    /// the use counters.
    ///
    /// Entries are disposed in no particular order.
    pub fn reset(&mut self) {
        let entries = self.map.len();
        self.index.clear();
        self.length = 0;
        self.metrics.record_reset();

        for (key, entry) in self.map.drain() {
            if let Some(dispose) = self.dispose.as_mut() {
                dispose(&key, &entry.value);
            }
        }
        debug!(entries, "cache reset");
    }

    /// Iterates over the entries from most to least recently used.
    ///
    /// Iteration does not change the eviction order. Stale entries met along
    /// the way are removed and disposed; with `allow_stale` they are still
    /// yielded this one time.
    pub fn iter(&mut self) -> Iter<'_, K, V, S, C> {
        Iter {
            cursor: self.index.next_counter().checked_sub(1),
            cache: self,
        }
    }

    /// Keys from most to least recently used. See [`LruCache::iter`].
    pub fn keys(&mut self) -> Keys<'_, K, V, S, C> {
        Keys { inner: self.iter() }
    }

    /// Values from most to least recently used. See [`LruCache::iter`].
    pub fn values(&mut self) -> Values<'_, K, V, S, C> {
        Values { inner: self.iter() }
    }

    /// Snapshot of the cache's metrics.
    pub fn snapshot(&self) -> LruCacheMetrics {
        LruCacheMetrics {
            core: self.metrics.clone(),
            weight: self.length(),
            max_weight: self.max,
            entries: self.map.len() as u64,
        }
    }

    /// Recomputes every weight with the current weigher, then trims.
    fn reweigh(&mut self) {
        let weigher = self.weigher.as_ref();
        let mut length: u128 = 0;
        for entry in self.map.values_mut() {
            entry.weight = weigh(weigher, &entry.value);
            length += u128::from(entry.weight);
        }
        self.length = length;
        debug!(length = self.length(), max = self.max, "cache weigher changed");

        if self.over_capacity() {
            self.trim();
        }
    }

    /// Evicts least recently used entries until the length fits the maximum.
    fn trim(&mut self) {
        let mut evicted = 0usize;
        while self.over_capacity() {
            let Some((key, entry)) = self.take_lru() else {
                break;
            };
            evicted += 1;
            self.metrics.record_eviction();
            trace!(
                weight = entry.weight,
                use_counter = entry.use_counter(),
                "evicted least recently used entry"
            );
            self.dispose_entry(&key, &entry.value);
        }
        debug!(evicted, length = self.length(), max = self.max, "trimmed cache");
    }

    #[inline]
    fn over_capacity(&self) -> bool {
        self.length > u128::from(self.max)
    }

    /// Unlinks the least recently used entry from both structures.
    fn take_lru(&mut self) -> Option<(K, CacheEntry<V>)> {
        let key = self.index.pop_oldest()?;
        let entry = self.map.remove(&key)?;
        self.length -= u128::from(entry.weight);
        Some((key, entry))
    }

    /// Unlinks `key` from both structures.
    fn unlink<Q>(&mut self, key: &Q) -> Option<(K, CacheEntry<V>)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (key, entry) = self.map.remove_entry(key)?;
        self.index.remove(entry.use_counter());
        self.length -= u128::from(entry.weight);
        Some((key, entry))
    }

    /// Unlinks a stale entry and notifies the disposer.
    fn expire<Q>(&mut self, key: &Q) -> Option<(K, CacheEntry<V>)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (key, entry) = self.unlink(key)?;
        self.metrics.record_expiration();
        trace!(
            age_nanos = entry.age_nanos(self.clock.now_nanos()),
            "expired stale entry"
        );
        self.dispose_entry(&key, &entry.value);
        Some((key, entry))
    }

    /// Value of `key` for enumeration: cloned if fresh, expired if stale.
    fn visit(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now_nanos();
        let entry = self.map.get(key)?;
        if !entry.is_stale(now, self.max_age_nanos) {
            return Some(entry.value.clone());
        }
        let (_, entry) = self.expire(key)?;
        if self.allow_stale {
            Some(entry.value)
        } else {
            None
        }
    }

    #[inline]
    fn dispose_entry(&mut self, key: &K, value: &V) {
        if let Some(dispose) = self.dispose.as_mut() {
            dispose(key, value);
        }
    }
}

impl<K, V, S, C> fmt::Debug for LruCache<K, V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max", &self.max)
            .field("length", &self.length)
            .field("len", &self.map.len())
            .field("max_age", &self.max_age)
            .field("allow_stale", &self.allow_stale)
            .field("index", &self.index)
            .finish()
    }
}

impl<K, V, S, C> CacheMetrics for LruCache<K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.snapshot().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

impl<'a, K, V, S, C> IntoIterator for &'a mut LruCache<K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
    type Item = (K, V);
    type IntoIter = Iter<'a, K, V, S, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, value)` pairs, most recently used first.
///
/// Created by [`LruCache::iter`]. Items are clones; the iterator holds the
/// cache mutably because it may expire stale entries as it goes.
pub struct Iter<'a, K, V, S = DefaultHashBuilder, C = DefaultClock> {
    cache: &'a mut LruCache<K, V, S, C>,
    /// Highest use counter not yet visited.
    cursor: Option<u64>,
}

impl<K, V, S, C> Iterator for Iter<'_, K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        loop {
            let found = self
                .cursor
                .and_then(|cursor| self.cache.index.newest_at_or_below(cursor))
                .map(|(counter, key)| (counter, key.clone()));
            let Some((counter, key)) = found else {
                self.cursor = None;
                return None;
            };
            self.cursor = counter.checked_sub(1);

            if let Some(value) = self.cache.visit(&key) {
                return Some((key, value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Some(_) => (0, Some(self.cache.len())),
            None => (0, Some(0)),
        }
    }
}

impl<K, V, S, C> FusedIterator for Iter<'_, K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
}

impl<K, V, S, C> fmt::Debug for Iter<'_, K, V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("cursor", &self.cursor).finish()
    }
}

/// Iterator over keys, most recently used first. Created by [`LruCache::keys`].
pub struct Keys<'a, K, V, S = DefaultHashBuilder, C = DefaultClock> {
    inner: Iter<'a, K, V, S, C>,
}

impl<K, V, S, C> Iterator for Keys<'_, K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S, C> FusedIterator for Keys<'_, K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
}

impl<K, V, S, C> fmt::Debug for Keys<'_, K, V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("inner", &self.inner).finish()
    }
}

/// Iterator over values, most recently used first. Created by [`LruCache::values`].
pub struct Values<'a, K, V, S = DefaultHashBuilder, C = DefaultClock> {
    inner: Iter<'a, K, V, S, C>,
}

impl<K, V, S, C> Iterator for Values<'_, K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S, C> FusedIterator for Values<'_, K, V, S, C>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    C: Clock,
{
}

impl<K, V, S, C> fmt::Debug for Values<'_, K, V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("inner", &self.inner).finish()
    }
}
