//! folder_summary: every folder statistic from a single walk
//!
//! Returns:
//! - num_files: Total number of files
//! - total_bytes: Total size in bytes
//! - avg_num_chars: alphanumeric chars per file (mean/sd)
//! - avg_word_length: word length across all files (mean/sd)
//!
//! The distribution stats are `None` when the subtree holds fewer than two
//! samples, rather than failing the whole summary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::Result;
use super::running_stats::{MeanSd, RunningStats};
use super::text_stats::{count_alphanumeric, read_text, word_lengths};
use super::walk::walk_files;

/// Result from folder_summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub num_files: u64,
    pub total_bytes: u64,
    pub avg_num_chars: Option<MeanSd>,
    pub avg_word_length: Option<MeanSd>,
}

/// Compute all folder statistics for `root` in one traversal
pub fn folder_summary(root: &Path) -> Result<FolderSummary> {
    let mut num_files = 0;
    let mut total_bytes = 0;
    let mut chars = RunningStats::new();
    let mut words = RunningStats::new();

    for entry in walk_files(root)? {
        let entry = entry?;
        num_files += 1;
        total_bytes += entry.size;

        let text = read_text(&entry.path)?;
        chars.push(count_alphanumeric(&text) as f64);
        words.extend(word_lengths(&text).map(|len| len as f64));
    }

    tracing::debug!(
        root = %root.display(),
        num_files,
        total_bytes,
        words = words.count(),
        mean_word_length = ?words.mean(),
        "folder_summary"
    );

    Ok(FolderSummary {
        num_files,
        total_bytes,
        avg_num_chars: chars.finish().ok(),
        avg_word_length: words.finish().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_tools::{alphanumeric_char_stats, count_files, total_bytes, StatsError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summary_matches_individual_stats() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("dir")).unwrap();
        fs::write(root.join("file1"), "12abC").unwrap();
        fs::write(root.join("file2"), "12abC").unwrap();
        fs::write(root.join("dir/file3"), "12ab").unwrap();
        fs::write(root.join("dir/file4"), "12abCD").unwrap();

        let summary = folder_summary(root).unwrap();
        assert_eq!(summary.num_files, count_files(root).unwrap());
        assert_eq!(summary.total_bytes, total_bytes(root).unwrap());
        assert_eq!(
            summary.avg_num_chars,
            Some(alphanumeric_char_stats(root).unwrap())
        );
        assert!(summary.avg_word_length.is_some());
    }

    #[test]
    fn test_summary_single_file_has_no_distributions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("only");
        fs::write(&path, "one").unwrap();

        let summary = folder_summary(&path).unwrap();
        assert_eq!(summary.num_files, 1);
        assert_eq!(summary.total_bytes, 3);
        assert_eq!(summary.avg_num_chars, None);
        assert_eq!(summary.avg_word_length, None);
    }

    #[test]
    fn test_summary_nonexistent() {
        let temp_dir = TempDir::new().unwrap();

        let result = folder_summary(&temp_dir.path().join("missing"));
        assert!(matches!(result, Err(StatsError::NotFound(_))));
    }
}
