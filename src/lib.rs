//! textcache - A text document cache with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           textcache                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Driver Layer (simulation/, main.rs)          │   │
//! │  │      Session (interactive) + Simulator + CSV report     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │          ↓ keys                          ↓ get / put            │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │   Workload (workload/)   │  │      Cache (cache/)      │    │
//! │  │ Random | Poisson |       │  │  ┌────────────────────┐  │    │
//! │  │ Weighted (seedable)      │  │  │ FIFO | LRU | LFU   │  │    │
//! │  └──────────────────────────┘  │  │ (swapped per run)  │  │    │
//! │                                │  └────────────────────┘  │    │
//! │                                │  EntryStore + CacheStats │    │
//! │                                └──────────────────────────┘    │
//! │                              ↓ miss                             │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Storage Layer (storage/)                  │   │
//! │  │   TextLoader + DiskTextStore (10ms latency) + corpus     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (TextId, Error, config)
//! - [`cache`] - The cache trait, policies and statistics
//! - [`storage`] - The slow backing store and corpus generation
//! - [`workload`] - Request stream generators
//! - [`simulation`] - Simulation runs, interactive sessions and reports
//!
//! # Quick Start
//! ```
//! use textcache::{Cache, CacheConfig, PolicyKind, TextId};
//!
//! let mut cache = PolicyKind::Lru.build::<String>(&CacheConfig::new(3, 100));
//!
//! cache.put(TextId(1), "a".to_string());
//! assert_eq!(cache.get(&TextId(1)).as_deref(), Some("a"));
//! assert_eq!(cache.get(&TextId(2)), None);
//! assert_eq!(cache.hit_rate(), 0.5);
//! ```

pub mod cache;
pub mod common;
pub mod simulation;
pub mod storage;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{CacheConfig, Error, Result, SimulationConfig, TextId, WorkloadConfig};

pub use cache::{
    Cache, CacheStats, FifoCache, LfuCache, LruCache, PolicyKind, SharedCache, StatsSnapshot,
};
pub use simulation::{RunResult, Session, Simulator};
pub use storage::{DiskTextStore, TextLoader};
pub use workload::{Distribution, WorkloadGenerator};
