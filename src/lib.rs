//! Gramdex - Filename Substring Search Index
//!
//! Builds an in-memory substring index over the filenames under a
//! directory tree: every filename is normalized (stop characters
//! removed, lower-cased) and decomposed into all contiguous
//! substrings of every length, each mapped to the absolute paths
//! whose normalized name contains it. "Which files contain substring
//! S" then answers from memory, without a per-query filesystem scan.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, xdg
//!   - index (the gram → paths mapping)
//!   - indexer (tree walking, normalization, grams, build pipeline)
//!   - lookup (validated queries over a built index)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Properties
//!
//! - UTF-8 safe gram slicing (character-based, never panics)
//! - Symlinks are never followed, so link cycles cannot recurse
//! - Append-only index: repeated gram occurrences keep duplicate
//!   path postings, by contract
//! - Single-threaded, synchronous build; no runtime required

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{GramdexError, Result};
pub use crate::core::index::GramIndex;
pub use crate::core::services::Services;
pub use crate::core::types::*;
