//! Cache statistics tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hit/miss counters owned by a single cache instance.
///
/// Each policy embeds its own tracker, so switching policies never carries
/// history over. Counters only move on lookups: a hit bumps `hits`, a miss
/// bumps `misses`. Inserts and evictions leave them alone.
///
/// Plain integers are enough here: a cache is mutated through `&mut self`
/// only, so there is never more than one writer.
///
/// # Example
/// ```
/// use textcache::CacheStats;
///
/// let mut stats = CacheStats::new();
/// stats.record_hit();
/// stats.record_miss();
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of lookups that found their key.
    hits: u64,

    /// Number of lookups that did not.
    misses: u64,
}

impl CacheStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self { hits: 0, misses: 0 }
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a copy of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}

/// A point-in-time copy of cache statistics.
///
/// # Example
/// ```
/// use textcache::CacheStats;
///
/// let stats = CacheStats::new();
/// let snapshot = stats.snapshot();
/// println!("{}", snapshot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
}

impl StatsSnapshot {
    /// Total number of lookups.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_increment() {
        let mut stats = CacheStats::new();

        for _ in 0..7 {
            stats.record_hit();
        }
        for _ in 0..3 {
            stats.record_miss();
        }

        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_only_misses() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_snapshot() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        stats.record_miss();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.misses, 3);
        assert_eq!(snapshot.lookups(), 4);
        assert_eq!(snapshot.hit_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = CacheStats::new();
        for _ in 0..100 {
            stats.record_hit();
        }

        stats.reset();

        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let snapshot = StatsSnapshot {
            hits: 80,
            misses: 20,
        };
        let display = format!("{}", snapshot);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("80.00%"));
    }
}
