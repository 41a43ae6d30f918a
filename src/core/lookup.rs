//! Gram lookup over a built index.
//!
//! Validates the query gram and answers "which files contain this
//! substring" from a [`GramIndex`]. Duplicate postings are returned
//! as stored, one per positional occurrence of the gram in a
//! filename, since the index never deduplicates.

use crate::core::error::{GramdexError, Result};
use crate::core::index::GramIndex;
use crate::core::types::{LookupRequest, LookupResponse};

/// Lookup service with configured result limits
pub struct LookupService {
    default_limit: usize,
    max_limit: usize,
    max_gram_length: usize,
}

impl LookupService {
    /// Create a lookup service.
    ///
    /// `default_limit` applies when a request carries no limit;
    /// requested limits are clamped to `1..=max_limit`. Grams longer
    /// than `max_gram_length` characters are rejected up front; no
    /// filename that long was ever indexed in one piece anyway.
    pub fn new(default_limit: usize, max_limit: usize, max_gram_length: usize) -> Self {
        Self {
            default_limit,
            max_limit,
            max_gram_length,
        }
    }

    /// Look up a gram in `index`.
    ///
    /// Returns the matching paths in discovery order, truncated to
    /// the effective limit, along with the untruncated posting count.
    pub fn lookup(&self, index: &GramIndex, request: LookupRequest) -> Result<LookupResponse> {
        // No trimming: whitespace can be a legitimate gram when the
        // stop set does not strip it, and membership is exact.
        let gram = request.gram.as_str();

        if gram.is_empty() {
            return Err(GramdexError::InvalidGram(
                "gram cannot be empty".to_string(),
            ));
        }

        let gram_chars = gram.chars().count();
        if gram_chars > self.max_gram_length {
            return Err(GramdexError::InvalidGram(format!(
                "gram is too long ({gram_chars} chars, max {})",
                self.max_gram_length
            )));
        }

        let limit = request
            .limit
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit);

        let postings = index.paths(gram);

        Ok(LookupResponse {
            gram: gram.to_string(),
            paths: postings
                .iter()
                .take(limit)
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
            total: postings.len(),
        })
    }
}
