//! Simulation driver - replays workloads against every policy.
//!
//! ```text
//!   WorkloadGenerator ──keys──► Cache::get ──hit──► done
//!                                   │
//!                                  miss
//!                                   ▼
//!                           TextLoader::load ──► Cache::put
//! ```
//!
//! Every (policy, distribution) pair gets a brand-new cache, so no state
//! leaks between runs.

pub mod report;
mod session;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cache::{Cache, PolicyKind};
use crate::common::{Result, SimulationConfig, TextId};
use crate::storage::TextLoader;
use crate::workload::{Distribution, WorkloadGenerator};

pub use session::{Served, Session};

/// Outcome of one (policy, distribution) run.
///
/// Field names follow the results CSV header:
/// `Algorithm,Pattern,HitRate,AvgTime(ms),TotalHits,TotalMisses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(rename = "Algorithm")]
    pub policy: String,

    #[serde(rename = "Pattern")]
    pub distribution: String,

    /// Hit rate in percent.
    #[serde(rename = "HitRate", serialize_with = "report::two_decimals")]
    pub hit_rate_pct: f64,

    /// Mean wall time per request in milliseconds.
    #[serde(rename = "AvgTime(ms)", serialize_with = "report::two_decimals")]
    pub avg_time_ms: f64,

    #[serde(rename = "TotalHits")]
    pub hits: u64,

    #[serde(rename = "TotalMisses")]
    pub misses: u64,
}

/// Runs policies against generated workloads through a loader.
pub struct Simulator<L> {
    config: SimulationConfig,
    loader: L,
    workload: WorkloadGenerator,
}

impl<L: TextLoader> Simulator<L> {
    /// Create a simulator.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: SimulationConfig, loader: L) -> Result<Self> {
        config.validate()?;
        let workload = WorkloadGenerator::new(config.workload.clone(), config.seed)?;
        Ok(Self {
            config,
            loader,
            workload,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build the request stream for one run: one sequence per user,
    /// concatenated.
    pub fn requests(&mut self, distribution: Distribution) -> Vec<TextId> {
        let mut all = Vec::with_capacity(self.config.total_requests());
        for _ in 0..self.config.users {
            all.extend(
                self.workload
                    .generate(distribution, self.config.requests_per_user),
            );
        }
        all
    }

    /// Run one policy against one distribution with a fresh cache.
    pub fn run_one(&mut self, policy: PolicyKind, distribution: Distribution) -> RunResult {
        let requests = self.requests(distribution);
        let mut cache = policy.build::<String>(&self.config.cache);

        let start = Instant::now();
        for &id in &requests {
            if cache.get(&id).is_none() {
                let content = self.loader.load(id);
                cache.put(id, content);
            }
        }
        let elapsed = start.elapsed();

        let stats = cache.stats();
        let result = RunResult {
            policy: policy.name().to_string(),
            distribution: distribution.name().to_string(),
            hit_rate_pct: stats.hit_rate() * 100.0,
            avg_time_ms: elapsed.as_secs_f64() * 1000.0 / requests.len().max(1) as f64,
            hits: stats.hits,
            misses: stats.misses,
        };

        info!(
            policy = %result.policy,
            pattern = %result.distribution,
            hit_rate_pct = result.hit_rate_pct,
            avg_time_ms = result.avg_time_ms,
            "run complete"
        );
        result
    }

    /// Run every policy against every distribution (policies outermost).
    pub fn run_all(&mut self) -> Vec<RunResult> {
        let mut results = Vec::with_capacity(PolicyKind::ALL.len() * Distribution::ALL.len());
        for policy in PolicyKind::ALL {
            for distribution in Distribution::ALL {
                results.push(self.run_one(policy, distribution));
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn config() -> SimulationConfig {
        SimulationConfig::default()
            .with_requests(3, 100)
            .with_seed(9)
    }

    #[test]
    fn test_run_one_counts_every_request() {
        let mut sim = Simulator::new(config(), |id: TextId| format!("text {}", id.0)).unwrap();
        let result = sim.run_one(PolicyKind::Lru, Distribution::Poisson);

        assert_eq!(result.hits + result.misses, 300);
        assert_eq!(result.policy, "LRU");
        assert_eq!(result.distribution, "Poisson");
        let expected = result.hits as f64 / 300.0 * 100.0;
        assert!((result.hit_rate_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn test_loader_called_once_per_miss() {
        let loads = Cell::new(0u64);
        let loader = |id: TextId| {
            loads.set(loads.get() + 1);
            id.to_string()
        };
        let mut sim = Simulator::new(config(), loader).unwrap();
        let result = sim.run_one(PolicyKind::Fifo, Distribution::Weighted);

        assert_eq!(loads.get(), result.misses);
    }

    #[test]
    fn test_run_all_covers_every_pair() {
        let mut sim = Simulator::new(config(), |_: TextId| String::new()).unwrap();
        let results = sim.run_all();

        assert_eq!(results.len(), 9);
        assert_eq!(results[0].policy, "FIFO");
        assert_eq!(results[0].distribution, "Random");
        assert_eq!(results[8].policy, "LFU");
        assert_eq!(results[8].distribution, "Weighted");
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let run = || {
            let mut sim = Simulator::new(config(), |_: TextId| String::new()).unwrap();
            sim.run_all()
                .into_iter()
                .map(|r| (r.hits, r.misses))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_capacity(0);
        assert!(Simulator::new(config, |_: TextId| String::new()).is_err());
    }
}
