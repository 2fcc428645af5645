// Integration tests for stats tools
// Builds real trees under a temp dir

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use textfs::stats_tools::{self, StatsError};

const EPS: f64 = 1e-12;

/// Lay out `(relative path, contents)` pairs under `root`
fn make_file_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create dirs");
        }
        fs::write(&path, contents).expect("Failed to write file");
    }
}

fn standard_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    make_file_tree(
        temp_dir.path(),
        &[
            ("file1", "12abC"),
            ("file2", "12abC"),
            ("dir/file3", "12ab"),
            ("dir/file4", "12abCD"),
        ],
    );
    temp_dir
}

#[test]
fn test_num_files() {
    let tree = standard_tree();

    assert_eq!(stats_tools::count_files(tree.path()).unwrap(), 4);
}

#[test]
fn test_num_files_is_additive() {
    let tree = standard_tree();
    let root = tree.path();

    let top_level = ["file1", "file2"]
        .iter()
        .map(|name| stats_tools::count_files(&root.join(name)).unwrap())
        .sum::<u64>();
    let nested = stats_tools::count_files(&root.join("dir")).unwrap();

    assert_eq!(stats_tools::count_files(root).unwrap(), top_level + nested);
}

#[test]
fn test_avg_num_chars() {
    let tree = standard_tree();

    let stats = stats_tools::alphanumeric_char_stats(tree.path()).unwrap();
    assert!((stats.mean - 5.0).abs() < EPS);
    assert!((stats.sd - 0.816496580927726).abs() < EPS);
}

#[test]
fn test_avg_word_length() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    make_file_tree(
        temp_dir.path(),
        &[
            ("file1", "12abC 12abCD"),
            ("file2", "12abC"),
            ("dir/file3", "12ab"),
            ("dir/file4", "12abCD"),
        ],
    );

    let stats = stats_tools::word_length_stats(temp_dir.path()).unwrap();
    assert!((stats.mean - 5.2).abs() < EPS);
    assert!((stats.sd - 0.8366600265340756).abs() < EPS);
}

#[test]
fn test_total_bytes() {
    let tree = standard_tree();

    assert_eq!(stats_tools::total_bytes(tree.path()).unwrap(), 20);
}

#[test]
fn test_empty_subtree_boundaries() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("empty")).expect("Failed to create dir");
    let root = temp_dir.path().join("empty");

    assert_eq!(stats_tools::count_files(&root).unwrap(), 0);
    assert_eq!(stats_tools::total_bytes(&root).unwrap(), 0);
    assert!(matches!(
        stats_tools::alphanumeric_char_stats(&root),
        Err(StatsError::InsufficientSamples { found: 0, required: 2 })
    ));
    assert!(matches!(
        stats_tools::word_length_stats(&root),
        Err(StatsError::InsufficientSamples { found: 0, required: 2 })
    ));
}

#[test]
fn test_single_file_boundaries() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    make_file_tree(temp_dir.path(), &[("solo/only", "one")]);
    let root = temp_dir.path().join("solo");

    assert!(matches!(
        stats_tools::alphanumeric_char_stats(&root),
        Err(StatsError::InsufficientSamples { found: 1, .. })
    ));
    // One file, one word: still a single sample
    assert!(matches!(
        stats_tools::word_length_stats(&root),
        Err(StatsError::InsufficientSamples { found: 1, .. })
    ));
}

#[test]
fn test_stats_on_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("nope");

    assert!(matches!(
        stats_tools::count_files(&root),
        Err(StatsError::NotFound(_))
    ));
    assert!(matches!(
        stats_tools::total_bytes(&root),
        Err(StatsError::NotFound(_))
    ));
}

#[test]
fn test_summary_over_standard_tree() {
    let tree = standard_tree();

    let summary = stats_tools::folder_summary(tree.path()).unwrap();
    assert_eq!(summary.num_files, 4);
    assert_eq!(summary.total_bytes, 20);

    let chars = summary.avg_num_chars.expect("four files give a distribution");
    assert!((chars.mean - 5.0).abs() < EPS);

    // One word per file: word lengths equal char counts here
    let words = summary.avg_word_length.expect("four words give a distribution");
    assert!((words.mean - 5.0).abs() < EPS);
    assert!((words.sd - 0.816496580927726).abs() < EPS);
}
