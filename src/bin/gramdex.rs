//! Gramdex CLI - filename substring search
//!
//! Builds an in-memory n-gram index over the filenames under a
//! directory and answers substring lookups against it.
//!
//! # Examples
//!
//! ```bash
//! # Build the index and report stats
//! gramdex index /path/to/tree
//!
//! # Which files contain "rom" in their normalized name?
//! gramdex lookup rom /path/to/tree
//!
//! # Show configuration
//! gramdex show-config
//! ```

use clap::Parser;
use gramdex::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing (stderr, filtered by RUST_LOG)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gramdex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
