//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub indexing: IndexingConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Serialize)]
pub struct IndexingConfig {
    pub stop_chars: String,
}

#[derive(Debug, Serialize)]
pub struct LookupConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub max_gram_length: usize,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let xdg = crate::core::xdg::XdgDirs::new();
    let config_file = xdg.config_file().to_string_lossy().into_owned();

    let response = ConfigResponse {
        config_file,
        indexing: IndexingConfig {
            stop_chars: config.indexing.stop_chars.clone(),
        },
        lookup: LookupConfig {
            default_limit: config.lookup.default_limit,
            max_limit: config.lookup.max_limit,
            max_gram_length: config.lookup.max_gram_length,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  indexing:");
            println!("    stop_chars: {:?}", response.indexing.stop_chars);
            println!("  lookup:");
            println!("    default_limit: {}", response.lookup.default_limit);
            println!("    max_limit: {}", response.lookup.max_limit);
            println!("    max_gram_length: {}", response.lookup.max_gram_length);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
