//! Eviction policy implementations.
//!
//! - [`FifoCache`] - insertion order, the control group
//! - [`LruCache`] - recency order
//! - [`LfuCache`] - access-count order, lowest key breaks ties
//!
//! [`PolicyKind`] names the policies and builds them from a
//! [`CacheConfig`], which is how the driver swaps policies between runs.

mod fifo;
mod lfu;
mod lru;

use std::fmt;
use std::str::FromStr;

pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use lru::LruCache;

use crate::cache::Cache;
use crate::common::{CacheConfig, Error, TextId};

/// The available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Lfu,
}

impl PolicyKind {
    /// Every policy, in report order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Lfu];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
        }
    }

    /// Build a fresh, empty cache of this kind.
    ///
    /// # Panics
    /// Panics if `config.capacity` is 0; call [`CacheConfig::validate`] first.
    pub fn build<V>(&self, config: &CacheConfig) -> Box<dyn Cache<TextId, V> + Send>
    where
        V: Clone + Send + 'static,
    {
        match self {
            PolicyKind::Fifo => Box::new(FifoCache::new(config.capacity)),
            PolicyKind::Lru => Box::new(LruCache::new(config.capacity)),
            PolicyKind::Lfu => Box::new(LfuCache::new(config.capacity)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(PolicyKind::Fifo),
            "LRU" => Ok(PolicyKind::Lru),
            "LFU" => Ok(PolicyKind::Lfu),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
