//! Generates the text documents served by [`DiskTextStore`].
//!
//! Each document cycles through a fixed set of paragraphs about caching,
//! followed by `Section S.` and `Document N.` markers, until it reaches the
//! target word count. Lines break every 15 words.
//!
//! [`DiskTextStore`]: crate::storage::DiskTextStore

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::Result;

/// Default number of words per generated document.
pub const DEFAULT_TARGET_WORDS: usize = 1200;

const WORDS_PER_LINE: usize = 15;

const PARAGRAPHS: [&str; 8] = [
    "In the field of computer science, caching is a fundamental technique used to improve \
     system performance. A cache stores frequently accessed data in a faster storage layer, \
     reducing the need to retrieve data from slower storage. This mechanism is crucial in \
     modern computing systems, from web browsers to database management systems.",
    "Cache replacement algorithms determine which items to remove when the cache is full and \
     new data needs to be stored. Different algorithms have different performance \
     characteristics depending on the access patterns. The choice of algorithm can \
     significantly impact the overall system performance and efficiency.",
    "FIFO, or First In First Out, is the simplest cache replacement algorithm. It removes the \
     oldest entry in the cache when space is needed. While easy to implement, FIFO does not \
     consider how frequently or recently an item was accessed.",
    "LRU, or Least Recently Used, removes the item that has not been accessed for the longest \
     time. This algorithm assumes that recently accessed items are more likely to be accessed \
     again soon. LRU generally provides better performance than FIFO for many workloads.",
    "LFU, or Least Frequently Used, tracks how many times each item has been accessed. When \
     eviction is needed, it removes the item with the lowest access count. This algorithm \
     works well when some items are consistently more popular than others.",
    "Understanding cache behavior requires analyzing hit rates and miss rates. A cache hit \
     occurs when requested data is found in the cache. A cache miss happens when the data \
     must be retrieved from slower storage.",
    "The temporal locality principle states that recently accessed data is likely to be \
     accessed again soon. The spatial locality principle suggests that data near recently \
     accessed data will likely be accessed next. These principles guide the design of \
     effective caching strategies.",
    "Memory hierarchies in computer systems include registers, cache, main memory, and disk \
     storage. Each level offers different trade-offs between speed, cost, and capacity. \
     Effective caching helps bridge the performance gap between these levels.",
];

/// Build the text of document `id` with at least `target_words` words.
pub fn generate_text(id: u32, target_words: usize) -> String {
    let mut words: Vec<String> = Vec::with_capacity(target_words + 64);

    for paragraph in PARAGRAPHS.iter().cycle() {
        if words.len() >= target_words {
            break;
        }
        words.extend(paragraph.split_whitespace().map(str::to_string));
        words.push(format!("Section {}.", words.len() / 100));
        words.push(format!("Document {}.", id));
    }

    let mut text = String::new();
    for (i, word) in words.iter().enumerate() {
        text.push_str(word);
        text.push(' ');
        if (i + 1) % WORDS_PER_LINE == 0 {
            text.push('\n');
        }
    }
    text
}

/// Write documents `1.txt ..= count.txt` into `dir`, creating it if needed.
///
/// Existing files are overwritten. Returns the number of files written.
///
/// # Errors
/// Returns `Error::Io` if the directory or a file cannot be written.
pub fn generate_corpus<P: AsRef<Path>>(dir: P, count: u32, target_words: usize) -> Result<usize> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    for id in 1..=count {
        fs::write(dir.join(format!("{}.txt", id)), generate_text(id, target_words))?;
    }

    info!(dir = %dir.display(), count, target_words, "generated text corpus");
    Ok(count as usize)
}
