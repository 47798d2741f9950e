//! LRU (Least Recently Used) eviction policy.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::recency_list::{RecencyList, SlotId};
use crate::cache::{Cache, CacheStats, EntryStore, StatsSnapshot};

/// Evicts the entry that was touched least recently.
///
/// Both a get-hit and a put (new or existing key) move the key to the front
/// of the recency list; the victim is always the back.
///
/// # Structure
/// ```text
///   store:   K → V
///   index:   K → SlotId ──┐
///                         ▼
///   recency: head ─► [k3] ◄──► [k1] ◄──► [k2] ◄── tail (victim)
/// ```
pub struct LruCache<K, V> {
    store: EntryStore<K, V>,
    recency: RecencyList<K>,
    index: HashMap<K, SlotId>,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an LRU cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: EntryStore::new(capacity),
            recency: RecencyList::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            stats: CacheStats::new(),
        }
    }

    /// Keys from most to least recently used.
    pub fn recency_order(&self) -> impl Iterator<Item = &K> + '_ {
        self.recency.iter()
    }

    fn touch(&mut self, key: &K) {
        if let Some(&slot) = self.index.get(key) {
            self.recency.move_to_front(slot);
        }
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    V: Clone,
{
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn get(&mut self, key: &K) -> Option<V> {
        let value = match self.store.get(key) {
            Some(value) => value.clone(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };
        self.touch(key);
        self.stats.record_hit();
        Some(value)
    }

    fn put(&mut self, key: K, value: V) {
        if self.store.contains(&key) {
            self.store.replace(&key, value);
            self.touch(&key);
            return;
        }

        if self.store.is_full() {
            self.evict();
        }

        self.store.insert(key.clone(), value);
        let slot = self.recency.push_front(key.clone());
        self.index.insert(key, slot);
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let lru = self.recency.pop_back()?;
        self.index.remove(&lru);
        let value = self.store.remove(&lru)?;
        debug!(policy = "LRU", key = ?lru, "evicted");
        Some((lru, value))
    }

    fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> usize {
        self.store.capacity()
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
