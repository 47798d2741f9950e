//! Error types for textcache.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in textcache.
///
/// The cache policies themselves are total and never fail; these errors
/// come from the layers around them (configuration, disk, reporting).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from corpus or report files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reading or writing the results CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A requested key lies outside `1..=domain`.
    ///
    /// The driver rejects these before they reach a cache.
    #[error("Key {key} is outside the domain 1..={domain}")]
    KeyOutOfDomain { key: i64, domain: u32 },

    /// A configuration value is out of range or unparsable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Policy name did not match FIFO, LRU or LFU.
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Distribution name did not match Random, Poisson or Weighted.
    #[error("Unknown workload distribution: {0}")]
    UnknownDistribution(String),
}
