//! Sparse recency index.
//!
//! Instead of a doubly linked list, recency is tracked with a global use
//! counter. Every insert or touch takes the next counter value and the key is
//! filed under it; the slot it previously occupied is vacated. Ordering by
//! counter is ordering by recency.
//!
//! Two cursors bound the occupied range:
//!
//! ```text
//!   oldest                                  next
//!     │                                       │
//!     ▼                                       ▼
//!   ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬ ─ ┐
//!   │ a │   │   │ c │   │ b │   │   │ d │ e │     (empty cells are vacated slots)
//!   └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴ ─ ┘
//!    LRU                                  MRU
//! ```
//!
//! `oldest` is kept on an occupied slot whenever the index is non-empty, by
//! walking it forward past vacated slots each time the slot it points at is
//! removed. Each counter value is walked over at most once in the lifetime
//! of the index, so finding the least recently used key is amortized O(1),
//! as are inserts and touches.
//!
//! Counters are never reused until [`RecencyIndex::clear`] restarts them.

extern crate alloc;

use core::fmt;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Maps use counters to the keys touched at that counter value.
pub(crate) struct RecencyIndex<K> {
    slots: HashMap<u64, K>,
    /// Next counter value to hand out.
    next: u64,
    /// No occupied slot has a counter below this.
    oldest: u64,
}

impl<K> RecencyIndex<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            next: 0,
            oldest: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub(crate) fn next_counter(&self) -> u64 {
        self.next
    }

    #[cfg(test)]
    pub(crate) fn oldest_counter(&self) -> u64 {
        self.oldest
    }

    /// Files `key` under a fresh counter and returns that counter.
    pub(crate) fn push(&mut self, key: K) -> u64 {
        let counter = self.next;
        self.next += 1;
        self.slots.insert(counter, key);
        counter
    }

    /// Vacates the slot at `counter`, returning the key that occupied it.
    pub(crate) fn remove(&mut self, counter: u64) -> Option<K> {
        let key = self.slots.remove(&counter)?;
        if counter == self.oldest {
            self.advance_oldest();
        }
        Some(key)
    }

    /// Moves the key at `counter` to a fresh counter, making it the most
    /// recently used. Returns the new counter.
    pub(crate) fn touch(&mut self, counter: u64) -> Option<u64> {
        let key = self.remove(counter)?;
        Some(self.push(key))
    }

    /// The least recently used slot.
    #[cfg(test)]
    pub(crate) fn oldest(&self) -> Option<(u64, &K)> {
        self.slots.get(&self.oldest).map(|key| (self.oldest, key))
    }

    /// Removes and returns the least recently used key.
    pub(crate) fn pop_oldest(&mut self) -> Option<K> {
        self.remove(self.oldest)
    }

    /// The most recently used slot whose counter is at most `counter`.
    ///
    /// Scans downwards over vacated slots; used for MRU-first enumeration.
    pub(crate) fn newest_at_or_below(&self, counter: u64) -> Option<(u64, &K)> {
        if self.is_empty() || counter < self.oldest {
            return None;
        }
        let mut cursor = counter.min(self.next - 1);
        loop {
            if let Some(key) = self.slots.get(&cursor) {
                return Some((cursor, key));
            }
            if cursor <= self.oldest {
                return None;
            }
            cursor -= 1;
        }
    }

    /// Drops every slot and restarts both counters at zero.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next = 0;
        self.oldest = 0;
    }

    fn advance_oldest(&mut self) {
        while self.oldest < self.next && !self.slots.contains_key(&self.oldest) {
            self.oldest += 1;
        }
    }
}

impl<K> fmt::Debug for RecencyIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyIndex")
            .field("len", &self.len())
            .field("next", &self.next)
            .field("oldest", &self.oldest)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect_mru_first(index: &RecencyIndex<&'static str>) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut cursor = index.next_counter().checked_sub(1);
        while let Some(c) = cursor {
            match index.newest_at_or_below(c) {
                Some((found, key)) => {
                    out.push(*key);
                    cursor = found.checked_sub(1);
                }
                None => break,
            }
        }
        out
    }

    #[test]
    fn test_push_assigns_increasing_counters() {
        let mut index = RecencyIndex::new();
        assert_eq!(index.push("a"), 0);
        assert_eq!(index.push("b"), 1);
        assert_eq!(index.push("c"), 2);
        assert_eq!(index.len(), 3);
        assert_eq!(index.next_counter(), 3);
        assert_eq!(index.oldest(), Some((0, &"a")));
    }

    #[test]
    fn test_touch_moves_key_to_front() {
        let mut index = RecencyIndex::new();
        index.push("a");
        index.push("b");
        index.push("c");

        assert_eq!(index.touch(0), Some(3));
        assert_eq!(index.oldest(), Some((1, &"b")));
        assert_eq!(index.oldest_counter(), 1);
        assert_eq!(collect_mru_first(&index), ["a", "c", "b"]);
    }

    #[test]
    fn test_oldest_skips_vacated_slots() {
        let mut index = RecencyIndex::new();
        for key in ["a", "b", "c", "d"] {
            index.push(key);
        }
        // Vacate a middle slot first; oldest must not move.
        assert_eq!(index.remove(1), Some("b"));
        assert_eq!(index.oldest_counter(), 0);

        // Removing the oldest walks over the hole left by "b".
        assert_eq!(index.pop_oldest(), Some("a"));
        assert_eq!(index.oldest(), Some((2, &"c")));
    }

    #[test]
    fn test_remove_missing_counter() {
        let mut index: RecencyIndex<&str> = RecencyIndex::new();
        assert_eq!(index.remove(5), None);
        index.push("a");
        assert_eq!(index.remove(0), Some("a"));
        assert_eq!(index.remove(0), None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_index_catches_up_with_next() {
        let mut index = RecencyIndex::new();
        index.push("a");
        index.push("b");
        index.pop_oldest();
        index.pop_oldest();
        assert!(index.is_empty());
        assert_eq!(index.oldest_counter(), index.next_counter());
        assert_eq!(index.oldest(), None);

        assert_eq!(index.push("c"), 2);
        assert_eq!(index.oldest(), Some((2, &"c")));
    }

    #[test]
    fn test_newest_at_or_below() {
        let mut index = RecencyIndex::new();
        for key in ["a", "b", "c", "d"] {
            index.push(key);
        }
        index.remove(2);

        assert_eq!(index.newest_at_or_below(100), Some((3, &"d")));
        assert_eq!(index.newest_at_or_below(2), Some((1, &"b")));
        assert_eq!(index.newest_at_or_below(0), Some((0, &"a")));

        index.pop_oldest();
        assert_eq!(index.newest_at_or_below(0), None);
    }

    #[test]
    fn test_clear_restarts_counters() {
        let mut index = RecencyIndex::new();
        index.push("a");
        index.push("b");
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.next_counter(), 0);
        assert_eq!(index.oldest_counter(), 0);
        assert_eq!(index.push("c"), 0);
    }

    #[test]
    fn test_counters_are_never_reused() {
        let mut index = RecencyIndex::new();
        let mut seen = Vec::new();
        let mut counter = index.push("hot");
        seen.push(counter);
        for _ in 0..50 {
            counter = index.touch(counter).unwrap();
            assert!(!seen.contains(&counter));
            seen.push(counter);
        }
        assert_eq!(index.len(), 1);
        assert_eq!(index.oldest(), Some((counter, &"hot")));
    }
}
