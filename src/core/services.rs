//! Unified service container for gramdex
//!
//! Provides shared access to the core services from the CLI adapter.

use crate::core::config::Config;
use crate::core::indexer::IndexBuilder;
use crate::core::lookup::LookupService;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create an IndexBuilder, optionally overriding the configured
    /// stop characters.
    ///
    /// Builders are created per-request since stop sets vary per
    /// invocation.
    pub fn create_builder(&self, stop_chars: Option<&str>) -> IndexBuilder {
        IndexBuilder::new(stop_chars.unwrap_or(&self.config.indexing.stop_chars))
    }

    /// Create the lookup service from configured limits
    pub fn lookup_service(&self) -> LookupService {
        LookupService::new(
            self.config.lookup.default_limit,
            self.config.lookup.max_limit,
            self.config.lookup.max_gram_length,
        )
    }
}
