//! Directory tree traversal as a fold.
//!
//! Visits every regular file under a root exactly once, threading a
//! caller-supplied accumulator through each visit. Symbolic links are
//! skipped outright: they are neither visited as files nor descended
//! into, so link cycles cannot recurse forever.
//!
//! Traversal is all-or-nothing: an unreadable root or a filesystem
//! error mid-walk fails the whole call rather than returning a
//! partial (or silently empty) result.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{GramdexError, Result};

/// Fold `f` over every non-symlink regular file under `root`.
///
/// Files are visited depth-first; sibling order follows whatever
/// order the underlying directory listing yields. The only ordering
/// guarantee is that each reachable file is folded in exactly once.
///
/// # Arguments
///
/// * `root` - Directory to walk (must exist and be a directory)
/// * `init` - Initial accumulator value
/// * `f` - Folding function applied as `f(path, acc) -> acc`
///
/// # Returns
///
/// The final accumulator, or an error if the root is not a readable
/// directory or the walk fails partway.
pub fn traverse<T, F>(root: &Path, init: T, mut f: F) -> Result<T>
where
    F: FnMut(&Path, T) -> T,
{
    let metadata = fs::metadata(root).map_err(|e| {
        GramdexError::InvalidRoot(format!("{}: {e}", root.display()))
    })?;

    if !metadata.is_dir() {
        return Err(GramdexError::InvalidRoot(format!(
            "{}: not a directory",
            root.display()
        )));
    }

    let mut acc = init;

    // WalkDir iterates with an explicit internal stack, so tree depth
    // cannot exhaust the call stack.
    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.map_err(|e| GramdexError::TraversalFailed(e.to_string()))?;

        // Symlinks are skipped entirely; with follow_links disabled,
        // WalkDir also never descends into a symlinked directory.
        if entry.path_is_symlink() {
            tracing::debug!("Skipping symlink: {:?}", entry.path());
            continue;
        }

        if entry.file_type().is_file() {
            acc = f(entry.path(), acc);
        }
    }

    Ok(acc)
}

/// Collect all non-symlink regular files under `root`.
///
/// Specialization of [`traverse`]: the fold is the single traversal
/// primitive and collection is just an accumulating instance of it.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    traverse(root, Vec::new(), |path, mut files| {
        files.push(path.to_path_buf());
        files
    })
}
