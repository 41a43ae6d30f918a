//! Gram generation: exhaustive contiguous substrings.
//!
//! A gram is a contiguous substring of a normalized filename, used as
//! an index key. Gram boundaries are **character** boundaries, found
//! via `char_indices()`, so multi-byte filenames (CJK, emoji) never
//! produce a mid-character slice panic.
//!
//! `all_grams` emits O(L²) strings for a length-L input. Filenames
//! are short, so the quadratic blow-up is an accepted cost of the
//! design rather than an oversight.
//!
//! # Example
//!
//! ```
//! use gramdex::core::indexer::{all_grams, n_grams};
//!
//! assert_eq!(n_grams(3, "from"), vec!["fro", "rom"]);
//! assert_eq!(
//!     all_grams("from"),
//!     vec!["f", "r", "o", "m", "fr", "ro", "om", "fro", "rom", "from"]
//! );
//! ```

/// Every contiguous substring of `s` of exactly `n` characters, in
/// left-to-right positional order.
///
/// For an input of L characters this produces L − n + 1 grams when
/// L ≥ n, and none otherwise.
///
/// # Panics
///
/// Panics if `n` is 0. A zero-length gram is a programming-contract
/// violation, not a recoverable condition.
pub fn n_grams(n: usize, s: &str) -> Vec<String> {
    assert!(n > 0, "gram length must be > 0");

    let char_indices: Vec<(usize, char)> = s.char_indices().collect();
    if char_indices.len() < n {
        return Vec::new();
    }

    let mut grams = Vec::with_capacity(char_indices.len() - n + 1);
    for start in 0..=char_indices.len() - n {
        let byte_start = char_indices[start].0;
        // The end boundary is the start of the char one past the
        // window, or the end of the string for the final window.
        let byte_end = if start + n < char_indices.len() {
            char_indices[start + n].0
        } else {
            s.len()
        };
        grams.push(s[byte_start..byte_end].to_string());
    }

    grams
}

/// All grams of `s`: the concatenation of `n_grams(n, s)` for
/// n = 1..=L, in increasing-n order, positional order within each n.
///
/// Empty input produces no grams. The output length is exactly
/// L·(L+1)/2.
pub fn all_grams(s: &str) -> Vec<String> {
    let len = s.chars().count();
    let mut grams = Vec::with_capacity(len * (len + 1) / 2);
    for n in 1..=len {
        grams.extend(n_grams(n, s));
    }
    grams
}
