//! Multi-byte filename tests
//!
//! Filenames with CJK characters and emoji must normalize and gram
//! without panics, and every gram must be a valid UTF-8 slice.

use crate::common::{assert_valid_stats, build_test_index, TestRepo};
use gramdex::core::indexer::{all_grams, normalize, stop_set};

#[test]
fn test_cjk_filename_grams() {
    let repo = TestRepo::with_files(&["中文文档.txt"]);

    let (index, stats) = build_test_index(repo.path());

    assert_eq!(stats.files_indexed, 1);
    assert_valid_stats(&stats, &index);

    // The dot is stripped by the default stop set.
    assert!(index.contains("中文文档txt"));
    assert!(index.contains("中"));
    assert!(index.contains("文档"));
}

#[test]
fn test_emoji_filename_grams() {
    let repo = TestRepo::with_files(&["🦀 notes.md"]);

    let (index, _) = build_test_index(repo.path());

    // Space and dot are stop characters by default.
    assert!(index.contains("🦀notesmd"));
    assert!(index.contains("🦀"));
    assert!(index.contains("🦀n"));
}

#[test]
fn test_mixed_ascii_and_multibyte_normalization() {
    let stops = stop_set("_-. ");
    let normalized = normalize("Ünïcode_TEST.日本", &stops);
    assert_eq!(normalized, "ünïcodetest日本");

    // Repeated "文": the single-char gram appears once per position.
    let grams = all_grams("文文");
    assert_eq!(grams, vec!["文", "文", "文文"]);
}

#[test]
fn test_all_grams_are_valid_utf8_slices() {
    let repo = TestRepo::with_files(&["données_финал.md", "中🦀混合.txt"]);

    let (index, _) = build_test_index(repo.path());

    for (gram, paths) in index.iter() {
        assert!(!gram.is_empty(), "empty gram indexed");
        assert!(std::str::from_utf8(gram.as_bytes()).is_ok());
        assert!(!paths.is_empty(), "gram {gram:?} has no postings");
    }
}
