//! The in-memory text cache.
//!
//! A cache sits between the driver and the slow backing store. Each
//! instance owns its own entry table, its own ordering structure and its
//! own statistics; nothing is shared between policy instances.
//!
//! # Components
//! - [`Cache`] - The capability set every policy implements
//! - [`policy`] - FIFO, LRU and LFU implementations
//! - [`EntryStore`] - Capacity-bounded key/value table
//! - [`RecencyList`] - Arena-backed list behind LRU ordering
//! - [`CacheStats`] - Hit/miss counters
//! - [`SharedCache`] - One-lock wrapper for multi-threaded callers

pub mod policy;
mod recency_list;
mod shared;
mod stats;
mod store;
mod traits;

pub use policy::{FifoCache, LfuCache, LruCache, PolicyKind};
pub use recency_list::{RecencyList, SlotId};
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::EntryStore;
pub use traits::Cache;
