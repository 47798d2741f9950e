//! Coarse-grained shared access to a single cache instance.

use parking_lot::Mutex;

use crate::cache::{Cache, StatsSnapshot};

/// A whole policy instance behind one mutex.
///
/// Policies have no internal locking. When several threads need the same
/// cache, every operation goes through this single lock, and compound
/// sequences (get, then load and put on a miss) go through
/// [`SharedCache::with`] so they run under one acquisition.
///
/// # Example
/// ```
/// use textcache::{CacheConfig, PolicyKind, SharedCache, TextId};
///
/// let cache = SharedCache::new(PolicyKind::Lru.build::<String>(&CacheConfig::default()));
/// cache.put(TextId(1), "hello".to_string());
/// assert_eq!(cache.get(&TextId(1)).as_deref(), Some("hello"));
/// ```
pub struct SharedCache<K, V> {
    inner: Mutex<Box<dyn Cache<K, V> + Send>>,
}

impl<K, V> SharedCache<K, V> {
    pub fn new(cache: Box<dyn Cache<K, V> + Send>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key)
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    pub fn evict(&self) -> Option<(K, V)> {
        self.inner.lock().evict()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats()
    }

    pub fn reset_stats(&self) {
        self.inner.lock().reset_stats();
    }

    /// Run `f` with exclusive access to the cache.
    pub fn with<R>(&self, f: impl FnOnce(&mut dyn Cache<K, V>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut **guard)
    }

    /// Unwrap the inner cache.
    pub fn into_inner(self) -> Box<dyn Cache<K, V> + Send> {
        self.inner.into_inner()
    }
}
