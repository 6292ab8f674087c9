//! Fixed-capacity LRU cache combining a hashed index with a recency list.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::{RecencyList, Slot};
use crate::stats::CacheStats;

/// Index record: the stored value plus the handle of this entry's node in
/// the recency list.
struct IndexEntry<V> {
    value: V,
    slot: Slot,
}

/// Fixed-capacity cache with exact least-recently-used eviction.
///
/// Two structures are kept mutually consistent: an AHash-backed index from
/// key to `(value, slot)` and a recency list ordered from most to least
/// recently touched. The slot stored in the index lets every operation
/// splice the recency list in O(1).
///
/// The cache assumes a single logical owner: every mutating operation takes
/// `&mut self` and completes without blocking. Embedders that share a cache
/// across threads wrap it in their own lock.
pub struct LruCache<K, V> {
    index: HashMap<K, IndexEntry<V>, RandomState>,
    order: RecencyList<K>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::ZeroCapacity`] if `capacity` is zero. A cache that
    /// must evict every entry it admits is a configuration mistake, not a
    /// runtime condition.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        debug!(capacity, "created LRU cache");

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            order: RecencyList::with_capacity(capacity),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Insert a new entry at the most-recently-used position.
    ///
    /// Returns `false` without touching the cache if `key` is already
    /// present: the existing entry keeps both its value and its recency.
    /// Callers that want overwrite semantics remove the key first.
    ///
    /// Admitting an entry beyond capacity silently evicts the least
    /// recently used entry; `true` is returned either way.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let slot = self.order.push_front(key.clone());
        self.index.insert(key, IndexEntry { value, slot });
        self.stats.record_insertion();

        if self.index.len() > self.capacity {
            self.evict_lru();
        }

        self.debug_validate();
        true
    }

    /// Look up a value and mark it most recently used.
    ///
    /// A hit splices the entry's node to the front of the recency list
    /// through its stored slot; a miss leaves the cache untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(entry) = self.index.get(key) {
            self.order.move_to_front(entry.slot);
            self.stats.record_hit();
            Some(&entry.value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    /// Remove an entry regardless of its recency, returning its value.
    ///
    /// Returns `None` if the key is absent, with no other effect.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.index.remove(key)?;
        self.order.remove(entry.slot);

        self.debug_validate();
        Some(entry.value)
    }

    /// Look up a value without promoting it.
    ///
    /// Neither the recency order nor the hit/miss counters change.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|entry| &entry.value)
    }

    /// Whether `key` is currently cached, without promoting it.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry. Capacity and statistics are retained.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();

        trace!("cleared cache");
        self.debug_validate();
    }

    /// Counters accumulated since construction or the last
    /// [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zero all statistics counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    fn evict_lru(&mut self) {
        if let Some(key) = self.order.pop_back() {
            self.index.remove(&key);
            self.stats.record_eviction();
            trace!(len = self.index.len(), "evicted least recently used entry");
        }
    }

    // Index and recency list must agree after every mutation.
    fn debug_validate(&self) {
        debug_assert_eq!(self.index.len(), self.order.len());
        debug_assert!(self.index.len() <= self.capacity);
        debug_assert!(self.order.iter().all(|key| self.index.contains_key(key)));
    }
}

#[cfg(test)]
impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Keys ordered from most to least recently used.
    pub(crate) fn keys_by_recency(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }
}
