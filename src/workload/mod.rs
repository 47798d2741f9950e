//! Workload generators - request streams under named distributions.
//!
//! ```text
//!   Random    uniform over 1..=domain
//!   Poisson   Poisson(mean), clamped into 1..=domain
//!   Weighted  p: uniform over hot range | 1-p: uniform over 1..=domain
//! ```
//!
//! Poisson clamping piles probability mass onto the two ends of the domain.
//! That distortion is part of the workload and is kept as is.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution as _, Poisson};

use crate::common::{Error, Result, TextId, WorkloadConfig};

/// The access patterns under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    Random,
    Poisson,
    Weighted,
}

impl Distribution {
    /// Every distribution, in report order.
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Poisson,
        Distribution::Weighted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::Poisson => "Poisson",
            Distribution::Weighted => "Weighted",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "uniform" => Ok(Distribution::Random),
            "poisson" => Ok(Distribution::Poisson),
            "weighted" | "hotset" => Ok(Distribution::Weighted),
            _ => Err(Error::UnknownDistribution(s.to_string())),
        }
    }
}

/// Produces finite key sequences for simulation runs.
///
/// # Example
/// ```
/// use textcache::workload::{Distribution, WorkloadGenerator};
/// use textcache::WorkloadConfig;
///
/// let mut gen = WorkloadGenerator::new(WorkloadConfig::default(), Some(42)).unwrap();
/// let keys = gen.generate(Distribution::Weighted, 200);
/// assert_eq!(keys.len(), 200);
/// ```
pub struct WorkloadGenerator {
    config: WorkloadConfig,
    rng: StdRng,
    poisson: Poisson<f64>,
}

impl WorkloadGenerator {
    /// Create a generator. `Some(seed)` makes every sequence reproducible;
    /// `None` seeds from OS entropy.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: WorkloadConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let poisson = Poisson::new(config.poisson_mean)
            .map_err(|e| Error::InvalidConfig(format!("poisson_mean: {}", e)))?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            rng,
            poisson,
        })
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Generate `count` keys drawn from `distribution`.
    pub fn generate(&mut self, distribution: Distribution, count: usize) -> Vec<TextId> {
        (0..count).map(|_| self.next_key(distribution)).collect()
    }

    /// Draw a single key.
    pub fn next_key(&mut self, distribution: Distribution) -> TextId {
        let domain = self.config.key_domain_size;
        let id = match distribution {
            Distribution::Random => self.rng.gen_range(1..=domain),
            Distribution::Poisson => {
                let sample: f64 = self.poisson.sample(&mut self.rng);
                clamp_to_domain(sample, domain)
            }
            Distribution::Weighted => {
                if self.rng.gen::<f64>() < self.config.hot_probability {
                    self.rng.gen_range(self.config.hot_range.clone())
                } else {
                    self.rng.gen_range(1..=domain)
                }
            }
        };
        TextId(id)
    }
}

fn clamp_to_domain(sample: f64, domain: u32) -> u32 {
    if sample < 1.0 {
        1
    } else if sample >= domain as f64 {
        domain
    } else {
        sample as u32
    }
}
