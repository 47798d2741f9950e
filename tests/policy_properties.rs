//! Property tests for the eviction policies.
//!
//! Random operation sequences are replayed against every policy and a
//! simple reference model, checking the invariants after every step.

use std::collections::HashMap;

use proptest::prelude::*;
use textcache::{Cache, FifoCache, LfuCache, LruCache};

#[derive(Debug, Clone)]
enum Op {
    Get(u8),
    Put(u8, u16),
    Evict,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..16).prop_map(Op::Get),
        4 => (0u8..16, any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => Just(Op::Evict),
    ]
}

fn policies(capacity: usize) -> Vec<Box<dyn Cache<u8, u16>>> {
    vec![
        Box::new(FifoCache::new(capacity)),
        Box::new(LruCache::new(capacity)),
        Box::new(LfuCache::new(capacity)),
    ]
}

proptest! {
    #[test]
    fn prop_capacity_and_stats_invariants(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        for mut cache in policies(capacity) {
            // Mirror of what is resident, to check values and membership.
            let mut model: HashMap<u8, u16> = HashMap::new();
            let mut hits = 0u64;
            let mut misses = 0u64;

            for op in &ops {
                match *op {
                    Op::Get(k) => {
                        let got = cache.get(&k);
                        prop_assert_eq!(got, model.get(&k).copied(), "{} get {}", cache.name(), k);
                        if got.is_some() { hits += 1 } else { misses += 1 }
                    }
                    Op::Put(k, v) => {
                        let before = cache.stats();
                        let was_resident = model.contains_key(&k);
                        let len_before = cache.len();

                        cache.put(k, v);

                        prop_assert_eq!(cache.stats(), before);
                        if was_resident {
                            prop_assert_eq!(cache.len(), len_before);
                        } else if len_before == capacity {
                            // Exactly one victim made room.
                            let victims: Vec<u8> = model
                                .keys()
                                .copied()
                                .filter(|key| !cache.contains(key))
                                .collect();
                            prop_assert_eq!(victims.len(), 1);
                            model.remove(&victims[0]);
                        }
                        model.insert(k, v);
                    }
                    Op::Evict => {
                        let before = cache.stats();
                        match cache.evict() {
                            Some((k, v)) => {
                                prop_assert_eq!(model.remove(&k), Some(v));
                            }
                            None => prop_assert!(model.is_empty()),
                        }
                        prop_assert_eq!(cache.stats(), before);
                    }
                }

                prop_assert!(cache.len() <= capacity);
                prop_assert_eq!(cache.len(), model.len());
                for key in model.keys() {
                    prop_assert!(cache.contains(key));
                }
            }

            prop_assert_eq!(cache.hits(), hits);
            prop_assert_eq!(cache.misses(), misses);
        }
    }

    #[test]
    fn prop_lfu_matches_reference_scan(
        capacity in 1usize..6,
        ops in prop::collection::vec(op_strategy(), 0..150),
    ) {
        let mut cache: LfuCache<u8, u16> = LfuCache::new(capacity);
        let mut counts: HashMap<u8, u64> = HashMap::new();

        // Victim by full scan: minimum count, then lowest key.
        let reference_victim = |counts: &HashMap<u8, u64>| {
            counts.iter().min_by_key(|(k, c)| (**c, **k)).map(|(k, _)| *k)
        };

        for op in &ops {
            match *op {
                Op::Get(k) => {
                    if cache.get(&k).is_some() {
                        *counts.get_mut(&k).unwrap() += 1;
                    }
                }
                Op::Put(k, v) => {
                    if let Some(c) = counts.get_mut(&k) {
                        *c += 1;
                    } else {
                        if counts.len() == capacity {
                            let victim = reference_victim(&counts).unwrap();
                            counts.remove(&victim);
                        }
                        counts.insert(k, 1);
                    }
                    cache.put(k, v);
                }
                Op::Evict => {
                    let expected = reference_victim(&counts);
                    let got = cache.evict().map(|(k, _)| k);
                    prop_assert_eq!(got, expected);
                    if let Some(k) = expected {
                        counts.remove(&k);
                    }
                }
            }

            for (k, c) in &counts {
                prop_assert_eq!(cache.frequency(k), Some(*c));
            }
            prop_assert_eq!(cache.len(), counts.len());
        }
    }

    #[test]
    fn prop_lru_matches_reference_order(
        capacity in 1usize..6,
        ops in prop::collection::vec(op_strategy(), 0..150),
    ) {
        let mut cache: LruCache<u8, u16> = LruCache::new(capacity);
        // Most recent first.
        let mut order: Vec<u8> = Vec::new();

        let touch = |order: &mut Vec<u8>, k: u8| {
            order.retain(|x| *x != k);
            order.insert(0, k);
        };

        for op in &ops {
            match *op {
                Op::Get(k) => {
                    if cache.get(&k).is_some() {
                        touch(&mut order, k);
                    }
                }
                Op::Put(k, v) => {
                    if !order.contains(&k) && order.len() == capacity {
                        order.pop();
                    }
                    touch(&mut order, k);
                    cache.put(k, v);
                }
                Op::Evict => {
                    let expected = order.pop();
                    prop_assert_eq!(cache.evict().map(|(k, _)| k), expected);
                }
            }

            let actual: Vec<u8> = cache.recency_order().copied().collect();
            prop_assert_eq!(&actual, &order);
        }
    }
}
