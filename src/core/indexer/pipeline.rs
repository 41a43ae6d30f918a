//! Index build orchestration.
//!
//! Composes the end-to-end build:
//! 1. Canonicalize the root (indexed paths are absolute)
//! 2. Walk the directory tree
//! 3. Normalize each filename and expand it into grams
//! 4. Fold (gram, path) pairs into the growing index

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use crate::core::error::{GramdexError, Result};
use crate::core::index::GramIndex;
use crate::core::indexer::{all_grams, normalize, stop_set, walker};
use crate::core::types::IndexStats;

/// Builds a [`GramIndex`] over the filenames under a root directory.
pub struct IndexBuilder {
    /// Characters stripped from filenames before gram generation
    stop_chars: HashSet<char>,
}

impl IndexBuilder {
    /// Create a builder with the given stop characters.
    ///
    /// Every character of `stop_chars` is removed from filenames
    /// during normalization; the empty string strips nothing.
    pub fn new(stop_chars: &str) -> Self {
        Self {
            stop_chars: stop_set(stop_chars),
        }
    }

    /// Build the index for `root` and return it with build stats.
    ///
    /// The root is canonicalized once up front, so every path in the
    /// index is absolute; a missing or non-directory root fails the
    /// call. The whole build is one synchronous traversal with no
    /// partial or streaming results.
    pub fn build(&self, root: &Path) -> Result<(GramIndex, IndexStats)> {
        let start = Instant::now();

        let root = root.canonicalize().map_err(|e| {
            GramdexError::InvalidRoot(format!("{}: {e}", root.display()))
        })?;

        tracing::info!("Building filename index for {:?}", root);

        let (index, files_indexed) =
            walker::traverse(&root, (GramIndex::new(), 0usize), |path, (index, count)| {
                let Some(name) = path.file_name() else {
                    // Regular files always carry a final component;
                    // nothing to index if the OS says otherwise.
                    return (index, count);
                };

                let normalized = normalize(&name.to_string_lossy(), &self.stop_chars);
                let grams = all_grams(&normalized);
                tracing::debug!("Indexed {:?} ({} grams)", path, grams.len());

                (index.merge_file(grams, path), count + 1)
            })?;

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Index complete: {} files, {} distinct grams, \
             {} postings in {}ms",
            files_indexed,
            index.distinct_grams(),
            index.total_postings(),
            duration_ms
        );

        let stats = IndexStats {
            files_indexed,
            distinct_grams: index.distinct_grams(),
            gram_postings: index.total_postings(),
            duration_ms,
        };

        Ok((index, stats))
    }
}
