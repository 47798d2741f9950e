//! Disk Text Store - the slow backing store behind the cache.
//!
//! The [`DiskTextStore`] resolves a cache miss to document text:
//! - Sleeping for a fixed latency to emulate slow disk access
//! - Reading `<root>/<id>.txt`
//! - Answering with a sentinel string when the document is missing

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::common::config::DEFAULT_LOAD_LATENCY;
use crate::common::TextId;
use crate::storage::TextLoader;

/// Content returned for documents that cannot be read.
///
/// The cache treats it as ordinary content.
pub const TEXT_NOT_FOUND: &str = "Error: Text not found";

/// Serves documents from a directory of text files.
///
/// # Layout
/// ```text
/// texts/
/// ├── 1.txt
/// ├── 2.txt
/// ├── ...
/// └── 100.txt
/// ```
///
/// Document N lives in `N.txt`.
#[derive(Debug, Clone)]
pub struct DiskTextStore {
    root: PathBuf,
    /// Delay applied before every load.
    latency: Duration,
}

impl DiskTextStore {
    /// Open a store rooted at `root` with the default 10ms latency.
    ///
    /// The directory is not checked; missing documents load as
    /// [`TEXT_NOT_FOUND`].
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            latency: DEFAULT_LOAD_LATENCY,
        }
    }

    /// Replace the artificial latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Path of the file holding document `id`.
    pub fn path_for(&self, id: TextId) -> PathBuf {
        self.root.join(format!("{}.txt", id.0))
    }

    /// Whether document `id` exists on disk. No latency is applied.
    pub fn exists(&self, id: TextId) -> bool {
        self.path_for(id).is_file()
    }
}

impl TextLoader for DiskTextStore {
    /// Blocking load with the configured latency.
    fn load(&self, id: TextId) -> String {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let path = self.path_for(id);
        match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                warn!(id = id.0, path = %path.display(), error = %err, "text not found");
                TEXT_NOT_FOUND.to_string()
            }
        }
    }
}
