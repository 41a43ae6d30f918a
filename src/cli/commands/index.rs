//! Index command - build the filename index and report stats

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Directory whose filenames to index
    pub path: PathBuf,

    /// Stop characters to strip before lower-casing (overrides config)
    #[arg(long, short = 's')]
    pub stop_chars: Option<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub path: String,
    pub files_indexed: usize,
    pub distinct_grams: usize,
    pub gram_postings: usize,
    pub duration_secs: f64,
    pub throughput_files_per_sec: f64,
}

/// Execute the index command
pub fn execute(
    args: IndexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate path
    let path = args.path.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.path.display(),
            e
        )
    })?;

    if !path.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. Gramdex indexes directory trees, not individual files.",
            path.display()
        )
        .into());
    }

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing filenames under {}...",
            colors::file_path(&path.display().to_string())
        );
    }

    let builder = services.create_builder(args.stop_chars.as_deref());
    let (_index, stats) = builder.build(&path)?;

    let duration_secs = stats.duration_ms as f64 / 1000.0;
    let throughput = if duration_secs > 0.0 {
        stats.files_indexed as f64 / duration_secs
    } else {
        0.0
    };

    let response = IndexResponse {
        path: path.to_string_lossy().into_owned(),
        files_indexed: stats.files_indexed,
        distinct_grams: stats.distinct_grams,
        gram_postings: stats.gram_postings,
        duration_secs,
        throughput_files_per_sec: throughput,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files ({} grams, {} postings) in {}",
                colors::success("Indexed"),
                colors::number(&response.files_indexed.to_string()),
                colors::number(&response.distinct_grams.to_string()),
                colors::number(&response.gram_postings.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Throughput: {} files/sec",
                colors::number(&format!("{:.0}", response.throughput_files_per_sec))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
