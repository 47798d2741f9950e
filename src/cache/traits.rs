//! The capability set shared by every eviction policy.
//!
//! ```text
//!                 ┌──────────────────────────────────────┐
//!                 │            Cache<K, V>               │
//!                 │  get(&mut, &K)   → Option<V>         │
//!                 │  put(&mut, K, V)                     │
//!                 │  evict(&mut)     → Option<(K, V)>    │
//!                 │  len / capacity / contains           │
//!                 │  stats / reset_stats                 │
//!                 └──────────────────┬───────────────────┘
//!              ┌─────────────────────┼─────────────────────┐
//!              ▼                     ▼                     ▼
//!        FifoCache              LruCache              LfuCache
//!     VecDeque<K> queue    RecencyList + index    counts + buckets
//! ```
//!
//! The trait is object safe so a driver can hold a `Box<dyn Cache<K, V>>`
//! and swap policies between runs without code changes.

use crate::cache::StatsSnapshot;

/// A capacity-bounded cache with a pluggable eviction rule.
///
/// Every operation is total. Only [`Cache::get`] changes statistics.
pub trait Cache<K, V> {
    /// Short policy name used in reports (`"FIFO"`, `"LRU"`, `"LFU"`).
    fn name(&self) -> &'static str;

    /// Look up `key`.
    ///
    /// On a hit the policy records the access, `hits` grows by one and a
    /// copy of the value is returned. On a miss `misses` grows by one and
    /// nothing else changes.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Insert or update `key`.
    ///
    /// Updating a resident key overwrites its value and applies the policy's
    /// touch rule without changing the entry count. Inserting a new key into
    /// a full cache evicts exactly one entry first.
    fn put(&mut self, key: K, value: V);

    /// Remove one entry chosen by the policy and return it.
    ///
    /// Returns `None` on an empty cache.
    fn evict(&mut self) -> Option<(K, V)>;

    /// Whether `key` is resident. Does not count as an access.
    fn contains(&self, key: &K) -> bool;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Maximum number of live entries.
    fn capacity(&self) -> usize;

    /// Current hit/miss counters.
    fn stats(&self) -> StatsSnapshot;

    /// Zero both counters, leaving contents alone.
    fn reset_stats(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn hits(&self) -> u64 {
        self.stats().hits
    }

    fn misses(&self) -> u64 {
        self.stats().misses
    }

    /// hits / (hits + misses), or 0.0 before any lookup.
    fn hit_rate(&self) -> f64 {
        self.stats().hit_rate()
    }
}
