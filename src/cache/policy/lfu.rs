//! LFU (Least Frequently Used) eviction policy.
//!
//! Access counts start at 1 on insert and grow by one on every get-hit and
//! every put to a resident key. The victim is the key with the smallest
//! count; ties go to the smallest key, so eviction is reproducible.
//!
//! Instead of scanning all counts on eviction, keys are bucketed by count:
//!
//! ```text
//!   counts:  K → u64
//!   buckets: BTreeMap<u64, BTreeSet<K>>
//!            1 → {4, 9}      ◄── first bucket, first key = victim (4)
//!            3 → {2}
//!            7 → {1, 5}
//! ```
//!
//! Touch and evict are O(log n) and pick exactly the key a full scan with
//! "lowest key wins ties" would pick.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use tracing::debug;

use crate::cache::{Cache, CacheStats, EntryStore, StatsSnapshot};

/// Evicts the entry with the fewest recorded accesses.
pub struct LfuCache<K, V> {
    store: EntryStore<K, V>,
    counts: HashMap<K, u64>,
    buckets: BTreeMap<u64, BTreeSet<K>>,
    stats: CacheStats,
}

impl<K, V> LfuCache<K, V>
where
    K: Hash + Eq + Ord + Clone,
{
    /// Create an LFU cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: EntryStore::new(capacity),
            counts: HashMap::with_capacity(capacity),
            buckets: BTreeMap::new(),
            stats: CacheStats::new(),
        }
    }

    /// Access count of a resident key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// The key the next eviction would remove.
    pub fn peek_victim(&self) -> Option<&K> {
        self.buckets.values().next().and_then(|keys| keys.iter().next())
    }

    fn increment(&mut self, key: &K) {
        let Some(count) = self.counts.get_mut(key) else {
            return;
        };
        let old = *count;
        *count += 1;

        self.unlink(old, key);
        self.buckets.entry(old + 1).or_default().insert(key.clone());
    }

    fn unlink(&mut self, count: u64, key: &K) {
        if let Some(keys) = self.buckets.get_mut(&count) {
            keys.remove(key);
            if keys.is_empty() {
                self.buckets.remove(&count);
            }
        }
    }
}

impl<K, V> Cache<K, V> for LfuCache<K, V>
where
    K: Hash + Eq + Ord + Clone + std::fmt::Debug,
    V: Clone,
{
    fn name(&self) -> &'static str {
        "LFU"
    }

    fn get(&mut self, key: &K) -> Option<V> {
        let value = match self.store.get(key) {
            Some(value) => value.clone(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };
        self.increment(key);
        self.stats.record_hit();
        Some(value)
    }

    fn put(&mut self, key: K, value: V) {
        if self.store.contains(&key) {
            self.store.replace(&key, value);
            self.increment(&key);
            return;
        }

        if self.store.is_full() {
            self.evict();
        }

        self.store.insert(key.clone(), value);
        self.counts.insert(key.clone(), 1);
        self.buckets.entry(1).or_default().insert(key);
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let victim = self.peek_victim()?.clone();
        let count = self.counts.remove(&victim)?;
        self.unlink(count, &victim);
        let value = self.store.remove(&victim)?;
        debug!(policy = "LFU", key = ?victim, count, "evicted");
        Some((victim, value))
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
