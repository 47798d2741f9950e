//! Policy scenario tests.
//!
//! End-to-end sequences against each policy through the `Cache` trait,
//! the way a driver uses them.

use textcache::{Cache, CacheConfig, FifoCache, LfuCache, LruCache, PolicyKind, TextId};

fn build(kind: PolicyKind, capacity: usize) -> Box<dyn Cache<TextId, String> + Send> {
    kind.build(&CacheConfig::new(capacity, 100))
}

fn s(v: &str) -> String {
    v.to_string()
}

// ============================================================================
// Shared contract
// ============================================================================

#[test]
fn test_get_on_unknown_key_is_a_pure_miss() {
    for kind in PolicyKind::ALL {
        let mut cache = build(kind, 3);
        cache.put(TextId(1), s("a"));

        assert_eq!(cache.get(&TextId(2)), None, "{}", kind);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&TextId(1)));
    }
}

#[test]
fn test_evict_on_empty_is_noop() {
    for kind in PolicyKind::ALL {
        let mut cache = build(kind, 2);
        assert_eq!(cache.evict(), None, "{}", kind);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().lookups(), 0);
    }
}

#[test]
fn test_size_never_exceeds_capacity() {
    for kind in PolicyKind::ALL {
        let mut cache = build(kind, 4);
        for i in 1..=50u32 {
            cache.put(TextId(i % 13 + 1), format!("v{}", i));
            assert!(cache.len() <= 4, "{} grew to {}", kind, cache.len());
        }
        assert_eq!(cache.len(), 4);
    }
}

#[test]
fn test_hit_rate_and_reset() {
    for kind in PolicyKind::ALL {
        let mut cache = build(kind, 3);
        assert_eq!(cache.hit_rate(), 0.0);

        cache.put(TextId(1), s("a"));
        cache.get(&TextId(1));
        cache.get(&TextId(1));
        cache.get(&TextId(1));
        cache.get(&TextId(9));
        assert_eq!(cache.hit_rate(), 0.75, "{}", kind);

        cache.reset_stats();
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
        assert_eq!(cache.hit_rate(), 0.0);
        assert_eq!(cache.len(), 1);
    }
}

#[test]
fn test_put_never_changes_stats() {
    for kind in PolicyKind::ALL {
        let mut cache = build(kind, 2);
        for i in 1..=10u32 {
            cache.put(TextId(i), s("x"));
            cache.put(TextId(i), s("y"));
        }
        cache.evict();
        assert_eq!(cache.stats().lookups(), 0, "{}", kind);
    }
}

#[test]
fn test_sentinel_content_is_cached_like_any_other() {
    for kind in PolicyKind::ALL {
        let mut cache = build(kind, 2);
        cache.put(TextId(7), s(textcache::storage::TEXT_NOT_FOUND));
        assert_eq!(
            cache.get(&TextId(7)).as_deref(),
            Some(textcache::storage::TEXT_NOT_FOUND)
        );
    }
}

// ============================================================================
// FIFO
// ============================================================================

#[test]
fn test_fifo_end_to_end() {
    let mut cache = build(PolicyKind::Fifo, 3);
    cache.put(TextId(1), s("a"));
    cache.put(TextId(2), s("b"));
    cache.put(TextId(3), s("c"));
    cache.put(TextId(4), s("d"));

    assert_eq!(cache.get(&TextId(1)), None);
    assert_eq!(cache.get(&TextId(4)).as_deref(), Some("d"));
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);
}

#[test]
fn test_fifo_strict_insertion_order_despite_updates() {
    let capacity = 5;
    let mut cache = FifoCache::new(capacity);

    for k in 1..=capacity as u32 {
        cache.put(k, k);
    }
    // Updates to resident keys do not refresh their position.
    cache.put(1, 100);
    cache.put(3, 300);
    cache.put(capacity as u32 + 1, 0);

    assert_eq!(cache.get(&1), None);
    for k in 2..=capacity as u32 + 1 {
        assert!(cache.get(&k).is_some(), "key {} missing", k);
    }
}

#[test]
fn test_fifo_repeated_put_is_idempotent() {
    let mut once = FifoCache::new(3);
    let mut twice = FifoCache::new(3);
    for k in [1, 2] {
        once.put(k, "v");
        twice.put(k, "v");
    }
    twice.put(2, "v");

    assert_eq!(once.len(), twice.len());
    assert!(once.insertion_order().eq(twice.insertion_order()));
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_end_to_end() {
    let mut cache = build(PolicyKind::Lru, 3);
    cache.put(TextId(1), s("a"));
    cache.put(TextId(2), s("b"));
    cache.put(TextId(3), s("c"));
    assert_eq!(cache.get(&TextId(1)).as_deref(), Some("a"));
    cache.put(TextId(4), s("d"));

    assert_eq!(cache.get(&TextId(2)), None);
    assert_eq!(cache.get(&TextId(1)).as_deref(), Some("a"));
}

#[test]
fn test_lru_touching_oldest_evicts_second_oldest() {
    let capacity = 6;
    let mut cache = LruCache::new(capacity);
    for k in 1..=capacity as u32 {
        cache.put(k, k);
    }

    cache.get(&1);
    cache.put(100, 100);

    assert!(cache.contains(&1));
    assert!(!cache.contains(&2));
}

#[test]
fn test_lru_repeated_put_only_touches() {
    let mut cache = LruCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(1, "a");
    let after_one: Vec<_> = cache.recency_order().copied().collect();
    cache.put(1, "a");
    let after_two: Vec<_> = cache.recency_order().copied().collect();

    assert_eq!(after_one, vec![1, 2]);
    assert_eq!(after_one, after_two);
    assert_eq!(cache.len(), 2);
}

// ============================================================================
// LFU
// ============================================================================

#[test]
fn test_lfu_end_to_end() {
    let mut cache = build(PolicyKind::Lfu, 2);
    cache.put(TextId(1), s("a"));
    cache.put(TextId(2), s("b"));
    assert_eq!(cache.get(&TextId(1)).as_deref(), Some("a"));
    cache.put(TextId(3), s("c"));

    assert_eq!(cache.get(&TextId(2)), None);
    assert_eq!(cache.get(&TextId(1)).as_deref(), Some("a"));
    assert_eq!(cache.get(&TextId(3)).as_deref(), Some("c"));
}

#[test]
fn test_lfu_less_frequent_evicted_first() {
    let mut cache = LfuCache::new(3);
    cache.put(10, "x");
    cache.put(20, "y");
    cache.put(30, "z");
    for _ in 0..3 {
        cache.get(&10);
    }
    cache.get(&30);

    cache.put(40, "w");
    assert!(!cache.contains(&20));

    // 40 (count 1) now goes before 30 (count 2) and 10 (count 4).
    cache.put(50, "v");
    assert!(!cache.contains(&40));
    assert!(cache.contains(&30));
    assert!(cache.contains(&10));
}

#[test]
fn test_lfu_tie_break_is_lowest_key_and_reproducible() {
    let run = || {
        let mut cache = LfuCache::new(4);
        for k in [42, 7, 19, 3] {
            cache.put(k, ());
        }
        cache.get(&3);
        let mut evicted = vec![];
        while let Some((k, _)) = cache.evict() {
            evicted.push(k);
        }
        evicted
    };

    assert_eq!(run(), vec![7, 19, 42, 3]);
    assert_eq!(run(), run());
}

#[test]
fn test_lfu_repeated_put_increments_each_time() {
    let mut cache = LfuCache::new(2);
    cache.put(1, "a");
    cache.put(1, "a");
    cache.put(1, "a");

    assert_eq!(cache.frequency(&1), Some(3));
    assert_eq!(cache.len(), 1);
}
