//! Lookup command - build the index, then query a gram

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::LookupRequest;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the lookup command
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Substring to look up (matched against normalized filenames)
    pub gram: String,

    /// Directory whose filenames to index before the lookup
    pub path: PathBuf,

    /// Maximum number of paths to print
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Stop characters to strip before lower-casing (overrides config)
    #[arg(long, short = 's')]
    pub stop_chars: Option<String>,

    /// Only print the posting count
    #[arg(long)]
    pub count_only: bool,
}

/// Lookup result item
#[derive(Debug, Serialize)]
pub struct LookupResultItem {
    pub rank: usize,
    pub file: String,
}

/// Lookup response
#[derive(Debug, Serialize)]
pub struct LookupResponseOutput {
    pub gram: String,
    pub path: String,
    pub total_postings: usize,
    pub results: Vec<LookupResultItem>,
}

/// Execute the lookup command
pub fn execute(
    args: LookupArgs,
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

    // Build the index for this invocation (nothing persists between
    // runs), then resolve the gram against it.
    let builder = services.create_builder(args.stop_chars.as_deref());
    let (index, _stats) = builder.build(&path)?;

    let request = LookupRequest {
        gram: args.gram.clone(),
        limit: args.limit,
    };
    let response = services.lookup_service().lookup(&index, request)?;

    let output = LookupResponseOutput {
        gram: response.gram.clone(),
        path: path.to_string_lossy().into_owned(),
        total_postings: response.total,
        results: response
            .paths
            .iter()
            .enumerate()
            .map(|(i, p)| LookupResultItem {
                rank: i + 1,
                file: p.clone(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if args.count_only {
                println!("{}", output.total_postings);
            } else if output.results.is_empty() {
                println!(
                    "No files contain '{}' under {}",
                    colors::gram(&output.gram),
                    colors::file_path(&output.path)
                );
            } else {
                println!(
                    "Found {} posting(s) for '{}':\n",
                    colors::number(&output.total_postings.to_string()),
                    colors::gram(&output.gram)
                );

                for result in &output.results {
                    println!(
                        "[{}] {}",
                        colors::rank(&result.rank.to_string()),
                        colors::file_path(&result.file)
                    );
                }

                if output.results.len() < output.total_postings {
                    println!(
                        "\n{}",
                        colors::dim(&format!(
                            "({} more not shown; raise --limit)",
                            output.total_postings - output.results.len()
                        ))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
