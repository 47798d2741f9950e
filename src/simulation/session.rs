//! Interactive session - serves individual requests through one cache.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{Cache, PolicyKind, StatsSnapshot};
use crate::common::{CacheConfig, Result, TextId};
use crate::storage::TextLoader;

/// The answer to one interactive request.
#[derive(Debug, Clone)]
pub struct Served {
    pub id: TextId,
    pub hit: bool,
    pub elapsed: Duration,
    pub content: String,
}

impl Served {
    /// The first `max_chars` characters of the content.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// A single cache serving requests one at a time.
pub struct Session<L> {
    config: CacheConfig,
    policy: PolicyKind,
    cache: Box<dyn Cache<TextId, String> + Send>,
    loader: L,
}

impl<L: TextLoader> Session<L> {
    /// Create a session with an empty cache of kind `policy`.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: CacheConfig, policy: PolicyKind, loader: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cache: policy.build(&config),
            config,
            policy,
            loader,
        })
    }

    /// Serve raw user input.
    ///
    /// # Errors
    /// Returns `Error::KeyOutOfDomain` if `raw` is not a valid document id;
    /// the cache is not touched in that case.
    pub fn request(&mut self, raw: i64) -> Result<Served> {
        let id = self.config.check_key(raw)?;
        Ok(self.serve(id))
    }

    /// Serve a validated id: cache first, backing store on a miss.
    pub fn serve(&mut self, id: TextId) -> Served {
        let start = Instant::now();

        let (hit, content) = match self.cache.get(&id) {
            Some(content) => (true, content),
            None => {
                let content = self.loader.load(id);
                self.cache.put(id, content.clone());
                (false, content)
            }
        };

        let elapsed = start.elapsed();
        debug!(id = id.0, hit, elapsed_ms = elapsed.as_millis() as u64, "served");
        Served {
            id,
            hit,
            elapsed,
            content,
        }
    }

    /// Throw the cache away and start over with an empty one.
    pub fn reset(&mut self) {
        self.cache = self.policy.build(&self.config);
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.cache.stats()
    }

    pub fn cache(&self) -> &dyn Cache<TextId, String> {
        self.cache.as_ref()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}
