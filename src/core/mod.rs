//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent of
//! how the tool is invoked (CLI or library embedding).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **index**: The in-memory gram → paths mapping
//! - **indexer**: Walking, normalization, gram generation, build pipeline
//! - **lookup**: Gram lookup over a built index
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod indexer;
pub mod lookup;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{GramdexError, Result};
pub use index::GramIndex;
pub use services::Services;
