//! Text distribution statistics over a subtree
//!
//! - alphanumeric characters per file: one sample per file
//! - word length: one sample per word, pooled across every file
//!
//! Both report mean and sample standard deviation.

use std::fs;
use std::path::Path;

use super::errors::{Result, StatsError};
use super::running_stats::{MeanSd, RunningStats};
use super::walk::walk_files;

/// Number of ASCII letters and digits in `text`
pub fn count_alphanumeric(text: &str) -> u64 {
    text.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// Length in characters of each whitespace-separated word
///
/// Punctuation is part of the word.
pub fn word_lengths(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.split_whitespace().map(|word| word.chars().count())
}

/// Mean/sd of alphanumeric character count per file beneath `root`
pub fn alphanumeric_char_stats(root: &Path) -> Result<MeanSd> {
    let mut stats = RunningStats::new();
    for_each_text(root, |text| stats.push(count_alphanumeric(text) as f64))?;

    tracing::debug!(root = %root.display(), samples = stats.count(), "alphanumeric_char_stats");
    stats.finish()
}

/// Mean/sd of word length over every word of every file beneath `root`
pub fn word_length_stats(root: &Path) -> Result<MeanSd> {
    let mut stats = RunningStats::new();
    for_each_text(root, |text| {
        stats.extend(word_lengths(text).map(|len| len as f64))
    })?;

    tracing::debug!(root = %root.display(), samples = stats.count(), "word_length_stats");
    stats.finish()
}

/// Read a file found during a walk as UTF-8
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| StatsError::io(path, e))
}

fn for_each_text(root: &Path, mut visit: impl FnMut(&str)) -> Result<()> {
    for entry in walk_files(root)? {
        let entry = entry?;
        let text = read_text(&entry.path)?;
        visit(&text);
    }
    Ok(())
}
