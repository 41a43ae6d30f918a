//! End-to-end index build contracts
//!
//! The duplication contract, empty-tree behavior, absolute paths,
//! and lookup over a freshly built index.

use crate::common::{assert_valid_stats, build_test_index, TestRepo};
use gramdex::core::indexer::IndexBuilder;
use gramdex::core::lookup::LookupService;
use gramdex::core::types::LookupRequest;

#[test]
fn test_duplication_contract_a_and_aa() {
    // With stops {.}: "aa.txt" -> "aatxt" carries gram "a" at two
    // positions, "a.txt" -> "atxt" at one. The index keeps all three
    // postings for "a".
    let repo = TestRepo::with_files(&["a.txt", "aa.txt"]);
    let builder = IndexBuilder::new(".");

    let (index, stats) = builder.build(repo.path()).unwrap();
    assert_valid_stats(&stats, &index);

    let postings = index.paths("a");
    assert_eq!(postings.len(), 3);
    assert_eq!(
        postings
            .iter()
            .filter(|p| p.file_name().unwrap() == "aa.txt")
            .count(),
        2
    );
    assert_eq!(
        postings
            .iter()
            .filter(|p| p.file_name().unwrap() == "a.txt")
            .count(),
        1
    );

    assert_eq!(index.paths("txt").len(), 2);
    assert_eq!(index.paths("atxt").len(), 2);
    assert_eq!(index.paths("aatxt").len(), 1);
}

#[test]
fn test_empty_directory_empty_index() {
    let repo = TestRepo::with_files(&[]);

    let (index, stats) = build_test_index(repo.path());

    assert!(index.is_empty());
    assert_eq!(stats.files_indexed, 0);
    assert_valid_stats(&stats, &index);
}

#[test]
fn test_indexed_paths_are_absolute_and_resolvable() {
    let repo = TestRepo::with_files(&["docs/guide.md", "src/deep/nested/mod.rs"]);

    let (index, _) = build_test_index(repo.path());

    for (_, paths) in index.iter() {
        for path in paths {
            assert!(path.is_absolute());
            assert!(path.exists(), "indexed path does not exist: {path:?}");
        }
    }
}

#[test]
fn test_same_normalized_name_in_different_directories() {
    let repo = TestRepo::with_files(&["one/report.txt", "two/report.txt"]);

    let (index, _) = build_test_index(repo.path());

    // Both files post under every shared gram.
    let postings = index.paths("reporttxt");
    assert_eq!(postings.len(), 2);
    assert_ne!(postings[0], postings[1]);
}

#[test]
fn test_lookup_over_built_index() {
    let repo = TestRepo::small();

    let (index, _) = build_test_index(repo.path());
    let service = LookupService::new(10, 100, 255);

    let response = service
        .lookup(
            &index,
            LookupRequest {
                gram: "librs".to_string(),
                limit: None,
            },
        )
        .unwrap();

    assert_eq!(response.total, 1);
    assert!(response.paths[0].ends_with("lib.rs"));

    // "mainrs" is contained in both "mainrs" and "testmainrs".
    let shared = service
        .lookup(
            &index,
            LookupRequest {
                gram: "mainrs".to_string(),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(shared.total, 2);

    let miss = service
        .lookup(
            &index,
            LookupRequest {
                gram: "nosuchgram".to_string(),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(miss.total, 0);
}

#[test]
fn test_case_folding_unifies_lookups() {
    let repo = TestRepo::with_files(&["MiXeD_CaSe.TXT"]);

    let (index, _) = build_test_index(repo.path());

    assert!(index.contains("mixedcasetxt"));
    assert!(!index.contains("MiXeD"));
}

#[test]
fn test_stats_triangular_posting_count_single_file() {
    // One file, normalized name of length L, no repeated grams needed:
    // postings must equal L(L+1)/2.
    let repo = TestRepo::with_files(&["from"]);

    let (index, stats) = build_test_index(repo.path());

    assert_eq!(stats.files_indexed, 1);
    assert_eq!(stats.gram_postings, 4 * 5 / 2);
    assert_eq!(index.paths("from").len(), 1);
    assert_eq!(index.paths("ro").len(), 1);
}
