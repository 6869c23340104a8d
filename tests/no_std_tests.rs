#![no_std]
extern crate aging_lru;
extern crate alloc;

use aging_lru::clock::ManualClock;
use aging_lru::config::LruCacheConfig;
use aging_lru::{DefaultHashBuilder, LruCache};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

type NoStdCache<K, V> = LruCache<K, V, DefaultHashBuilder, ManualClock>;

// Helper to build a cache that never touches std time
fn make_lru<K: core::hash::Hash + Eq + Clone, V: Clone>(
    max: u64,
    max_age: Option<Duration>,
    clock: ManualClock,
) -> NoStdCache<K, V> {
    let config = LruCacheConfig {
        max,
        max_age,
        allow_stale: false,
    };
    LruCache::init_with_clock(config, None, clock)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2, None, ManualClock::new());
    cache.set("a", 1);
    cache.set("b", 2);
    assert_eq!(cache.get(&"a"), Some(1));
    cache.set("c", 3);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.keys().collect::<Vec<_>>(), ["c", "a"]);
}

#[test]
fn test_owned_keys_in_no_std() {
    let mut cache: NoStdCache<String, usize> = make_lru(3, None, ManualClock::new());
    for i in 0..5 {
        cache.set(format!("key{}", i), i);
    }
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get("key4"), Some(4));
    assert!(!cache.contains_key("key0"));
}

#[test]
fn test_weighted_in_no_std() {
    let mut cache: NoStdCache<u32, Vec<u8>> =
        make_lru(10, None, ManualClock::new()).with_weigher(|v: &Vec<u8>| v.len() as u64);
    assert!(cache.set(1, alloc::vec![0; 6]));
    assert!(cache.set(2, alloc::vec![0; 4]));
    assert!(!cache.set(3, alloc::vec![0; 11]));
    assert!(cache.set(4, alloc::vec![0; 1]));
    assert_eq!(cache.length(), 5);
    assert_eq!(cache.get(&1), None);
}

#[test]
fn test_manual_clock_expiry_in_no_std() {
    let clock = ManualClock::new();
    let mut cache = make_lru(0, Some(Duration::from_millis(500)), clock.clone());
    cache.set(1u8, 'x');
    clock.advance(Duration::from_millis(500));
    assert_eq!(cache.peek(&1), Some('x'));
    clock.advance(Duration::from_millis(1));
    assert_eq!(cache.peek(&1), None);
    assert!(cache.is_empty());
}
