//! FIFO (First-In-First-Out) eviction policy.
//!
//! The baseline policy: eviction is O(1) and hits cost nothing beyond the
//! table lookup, since nothing is reordered on access.

use std::collections::VecDeque;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{Cache, CacheStats, EntryStore, StatsSnapshot};

/// Evicts entries in the order they were first inserted.
///
/// Updating a resident key overwrites its value but keeps its original
/// position in the queue.
pub struct FifoCache<K, V> {
    store: EntryStore<K, V>,

    /// Resident keys in insertion order (front = oldest). Holds exactly one
    /// record per resident key.
    queue: VecDeque<K>,

    stats: CacheStats,
}

impl<K, V> FifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a FIFO cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: EntryStore::new(capacity),
            queue: VecDeque::with_capacity(capacity),
            stats: CacheStats::new(),
        }
    }

    /// Keys from oldest to newest insertion.
    pub fn insertion_order(&self) -> impl Iterator<Item = &K> {
        self.queue.iter()
    }
}

impl<K, V> Cache<K, V> for FifoCache<K, V>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    V: Clone,
{
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn get(&mut self, key: &K) -> Option<V> {
        match self.store.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    fn put(&mut self, key: K, value: V) {
        // Resident: overwrite only, the queue position stays.
        if self.store.contains(&key) {
            self.store.replace(&key, value);
            return;
        }

        if self.store.is_full() {
            self.evict();
        }

        self.store.insert(key.clone(), value);
        self.queue.push_back(key);
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let oldest = self.queue.pop_front()?;
        let value = self.store.remove(&oldest)?;
        debug!(policy = "FIFO", key = ?oldest, "evicted");
        Some((oldest, value))
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
