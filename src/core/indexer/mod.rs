//! Filename indexing pipeline.
//!
//! Walks a directory tree, normalizes each filename, expands it into
//! grams, and folds the results into an in-memory inverted index.

mod grams;
mod normalize;
pub mod pipeline;
pub mod walker;

pub use grams::{all_grams, n_grams};
pub use normalize::{normalize, stop_set, DEFAULT_STOP_CHARS};
pub use pipeline::IndexBuilder;
pub use walker::{collect_files, traverse};
