//! Capacity-bounded key/value table wrapped by every policy.

use std::collections::HashMap;
use std::hash::Hash;

/// The resident entries of one cache instance.
///
/// The store only knows about keys, values and its bound. Choosing what to
/// evict is the owning policy's job; the policy must make room (via
/// [`EntryStore::remove`]) before calling [`EntryStore::insert`] on a full
/// store.
#[derive(Debug, Clone)]
pub struct EntryStore<K, V> {
    entries: HashMap<K, V>,
    capacity: usize,
}

impl<K, V> EntryStore<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty store holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when inserting one more new key would exceed the bound.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Overwrite the value of a resident key.
    ///
    /// Returns `false` (and drops `value`) if the key is not resident.
    pub fn replace(&mut self, key: &K, value: V) -> bool {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Insert a new key.
    ///
    /// # Panics
    /// Panics in debug builds if the store is full and `key` is new.
    pub fn insert(&mut self, key: K, value: V) {
        debug_assert!(
            self.contains(&key) || !self.is_full(),
            "insert into full store; evict first"
        );
        self.entries.insert(key, value);
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }
}
