//! Storage layer - the slow backing store behind the cache.
//!
//! - [`TextLoader`] - The load contract the driver depends on
//! - [`DiskTextStore`] - Text files on disk with artificial latency
//! - [`corpus`] - Generation of the text files

pub mod corpus;
mod disk_text_store;

pub use disk_text_store::{DiskTextStore, TEXT_NOT_FOUND};

use crate::common::TextId;

/// Resolves a document id to its full text.
///
/// Loads are blocking and may be slow. A missing document is reported as
/// content (see [`TEXT_NOT_FOUND`]), never as an error, so the result can
/// always be cached.
pub trait TextLoader {
    fn load(&self, id: TextId) -> String;
}

impl<F> TextLoader for F
where
    F: Fn(TextId) -> String,
{
    fn load(&self, id: TextId) -> String {
        self(id)
    }
}
