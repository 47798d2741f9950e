//! Configuration for caches, workloads and simulation runs.
//!
//! The defaults reproduce the classic setup: a 10-entry cache in front of
//! 100 text documents, each disk load costing 10ms, driven by three users
//! issuing 200 requests each.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::common::{Error, Result, TextId};

/// Default number of live entries a cache may hold.
pub const DEFAULT_CAPACITY: usize = 10;

/// Default number of text documents (valid keys are `1..=100`).
pub const DEFAULT_KEY_DOMAIN: u32 = 100;

/// Default artificial latency of a single backing-store load.
pub const DEFAULT_LOAD_LATENCY: Duration = Duration::from_millis(10);

/// Default mean of the Poisson workload.
pub const DEFAULT_POISSON_MEAN: f64 = 50.0;

/// Default hot set of the weighted workload.
pub const DEFAULT_HOT_RANGE: RangeInclusive<u32> = 30..=40;

/// Default probability of drawing from the hot set.
pub const DEFAULT_HOT_PROBABILITY: f64 = 0.43;

/// Sizing of a single cache instance.
///
/// Both values are per-instance so differently sized caches can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries.
    pub capacity: usize,

    /// Upper bound of valid keys (`1..=key_domain_size`).
    pub key_domain_size: u32,
}

impl CacheConfig {
    pub fn new(capacity: usize, key_domain_size: u32) -> Self {
        Self {
            capacity,
            key_domain_size,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if either bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig(
                "capacity must be greater than 0".to_string(),
            ));
        }
        if self.key_domain_size == 0 {
            return Err(Error::InvalidConfig(
                "key_domain_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Turn raw driver input into a key, rejecting out-of-domain values.
    ///
    /// # Errors
    /// Returns `Error::KeyOutOfDomain` for anything outside `1..=key_domain_size`.
    pub fn check_key(&self, raw: i64) -> Result<TextId> {
        TextId::checked(raw, self.key_domain_size)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_KEY_DOMAIN)
    }
}

/// Shape of the generated request streams.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadConfig {
    /// Keys are drawn from `1..=key_domain_size`.
    pub key_domain_size: u32,

    /// Mean (lambda) of the Poisson workload.
    pub poisson_mean: f64,

    /// Hot sub-range favoured by the weighted workload.
    pub hot_range: RangeInclusive<u32>,

    /// Probability that a weighted request targets the hot range.
    pub hot_probability: f64,
}

impl WorkloadConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if the domain is empty, the mean is not
    /// positive, the hot range falls outside the domain, or the probability
    /// is not in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.key_domain_size == 0 {
            return Err(Error::InvalidConfig(
                "key_domain_size must be greater than 0".to_string(),
            ));
        }
        if !(self.poisson_mean.is_finite() && self.poisson_mean > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "poisson_mean must be positive, got {}",
                self.poisson_mean
            )));
        }
        let (lo, hi) = (*self.hot_range.start(), *self.hot_range.end());
        if lo == 0 || lo > hi || hi > self.key_domain_size {
            return Err(Error::InvalidConfig(format!(
                "hot_range {}..={} must lie within 1..={}",
                lo, hi, self.key_domain_size
            )));
        }
        if !(0.0..=1.0).contains(&self.hot_probability) {
            return Err(Error::InvalidConfig(format!(
                "hot_probability must be within [0, 1], got {}",
                self.hot_probability
            )));
        }
        Ok(())
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            key_domain_size: DEFAULT_KEY_DOMAIN,
            poisson_mean: DEFAULT_POISSON_MEAN,
            hot_range: DEFAULT_HOT_RANGE,
            hot_probability: DEFAULT_HOT_PROBABILITY,
        }
    }
}

/// Everything a simulation run needs.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub cache: CacheConfig,
    pub workload: WorkloadConfig,

    /// Number of simulated users, each contributing one request sequence.
    pub users: usize,

    /// Requests generated per user.
    pub requests_per_user: usize,

    /// Fixed seed for reproducible workloads; `None` draws from entropy.
    pub seed: Option<u64>,

    /// Directory holding `<id>.txt` documents.
    pub texts_dir: PathBuf,

    /// Where the results CSV is written.
    pub results_path: PathBuf,

    /// Artificial latency of each disk load.
    pub load_latency: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            workload: WorkloadConfig::default(),
            users: 3,
            requests_per_user: 200,
            seed: None,
            texts_dir: PathBuf::from("texts"),
            results_path: PathBuf::from("results.csv"),
            load_latency: DEFAULT_LOAD_LATENCY,
        }
    }
}

impl SimulationConfig {
    /// Build a configuration from defaults plus `TEXTCACHE_*` environment
    /// overrides.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if a variable does not parse or the
    /// resulting configuration is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SimulationConfig::from_env`] but reads variables through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("TEXTCACHE_CAPACITY") {
            config.cache.capacity = parse_var("TEXTCACHE_CAPACITY", &v)?;
        }
        if let Some(v) = lookup("TEXTCACHE_TEXTS") {
            let domain = parse_var("TEXTCACHE_TEXTS", &v)?;
            config = config.with_key_domain_size(domain);
        }
        if let Some(v) = lookup("TEXTCACHE_TEXTS_DIR") {
            config.texts_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("TEXTCACHE_RESULTS") {
            config.results_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("TEXTCACHE_SEED") {
            config.seed = Some(parse_var("TEXTCACHE_SEED", &v)?);
        }
        if let Some(v) = lookup("TEXTCACHE_LATENCY_MS") {
            config.load_latency = Duration::from_millis(parse_var("TEXTCACHE_LATENCY_MS", &v)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate every nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.cache.validate()?;
        self.workload.validate()?;
        if self.cache.key_domain_size != self.workload.key_domain_size {
            return Err(Error::InvalidConfig(format!(
                "cache domain {} does not match workload domain {}",
                self.cache.key_domain_size, self.workload.key_domain_size
            )));
        }
        if self.users == 0 || self.requests_per_user == 0 {
            return Err(Error::InvalidConfig(
                "users and requests_per_user must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of requests in one run.
    pub fn total_requests(&self) -> usize {
        self.users * self.requests_per_user
    }

    /// Set the cache capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.cache.capacity = capacity;
        self
    }

    /// Set the key domain for both the cache and the workload.
    pub fn with_key_domain_size(mut self, domain: u32) -> Self {
        self.cache.key_domain_size = domain;
        self.workload.key_domain_size = domain;
        self
    }

    /// Set the number of users and requests per user.
    pub fn with_requests(mut self, users: usize, requests_per_user: usize) -> Self {
        self.users = users;
        self.requests_per_user = requests_per_user;
        self
    }

    /// Fix the workload seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the texts directory.
    pub fn with_texts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.texts_dir = dir.into();
        self
    }

    /// Set the results CSV path.
    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    /// Set the artificial disk latency.
    pub fn with_load_latency(mut self, latency: Duration) -> Self {
        self.load_latency = latency;
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{} has invalid value {:?}", name, value)))
}
