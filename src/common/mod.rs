//! Common types and utilities shared across textcache.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (cache sizing, workload shape, simulation settings)
//! - Error types
//! - Identifiers (TextId)

pub mod config;
pub mod error;
mod text_id;

pub use config::{CacheConfig, SimulationConfig, WorkloadConfig};
pub use error::{Error, Result};
pub use text_id::TextId;
