//! Core data types for gramdex.
//!
//! This module defines the data structures shared across the
//! application: indexing statistics and lookup requests/responses.

use serde::{Deserialize, Serialize};

/// Statistics from an index build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of regular files folded into the index
    pub files_indexed: usize,

    /// Number of distinct grams (index keys)
    pub distinct_grams: usize,

    /// Total path postings across all grams (duplicates included)
    pub gram_postings: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}

/// Request to look up a gram in a built index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    /// The gram (substring) to look up
    pub gram: String,

    /// Maximum number of paths to return (optional)
    pub limit: Option<usize>,
}

/// Response from a lookup operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    /// The gram that was looked up
    pub gram: String,

    /// Matching paths, in discovery order. A path appears once per
    /// positional occurrence of the gram in its normalized filename.
    pub paths: Vec<String>,

    /// Total postings for this gram before the limit was applied
    pub total: usize,
}
