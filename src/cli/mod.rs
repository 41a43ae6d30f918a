//! CLI adapter for gramdex
//!
//! Provides the command-line interface over the core indexing and
//! lookup capabilities. Depends on `core/` only.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! |  (clap adapter)  |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Gramdex - Filename Substring Search
///
/// Builds an in-memory n-gram index over the filenames under a directory
/// and answers "which files contain this substring" from it.
#[derive(Parser, Debug)]
#[command(name = "gramdex")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Filename substring search index", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the filename index for a directory and report stats
    Index(commands::IndexArgs),

    /// Build the index, then look up which files contain a substring
    Lookup(commands::LookupArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  gramdex completions bash > ~/.local/share/bash-completion/completions/gramdex
    ///   zsh:   gramdex completions zsh > ~/.zfunc/_gramdex
    ///   fish:  gramdex completions fish > ~/.config/fish/completions/gramdex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load()?;

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Index(args) => commands::index::execute(args, &services, cli.format),
        Commands::Lookup(args) => commands::lookup::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
