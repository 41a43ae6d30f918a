//! Filename normalization.
//!
//! Strips a configurable set of stop characters from a filename and
//! lower-cases the remainder. Normalization runs before gram
//! generation so that `My_File.TXT` and `myfile.txt` index to the
//! same grams.

use std::collections::HashSet;

/// Stop characters removed by default, matching the separator noise
/// common in filenames.
pub const DEFAULT_STOP_CHARS: &str = "_-.$ ";

/// Build a stop-character set from its configuration string form.
///
/// Every character of `chars` becomes a stop character; the empty
/// string yields an empty set (nothing is stripped).
pub fn stop_set(chars: &str) -> HashSet<char> {
    chars.chars().collect()
}

/// Normalize a filename for indexing.
///
/// Produces, in original order, every character of `name` that is not
/// in `stop_chars`, lower-cased. Non-alphabetic characters pass
/// through lowercasing unchanged. Total over all inputs: empty names
/// and stop sets that strip everything both yield an empty string.
///
/// Unicode lowercasing may expand a character into several (e.g.
/// `İ`); grams are generated from the normalized
/// string, not the original.
pub fn normalize(name: &str, stop_chars: &HashSet<char>) -> String {
    name.chars()
        .filter(|c| !stop_chars.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}
