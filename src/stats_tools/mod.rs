//! Stats tools: recursive folder statistics
//!
//! Every statistic is fed by the same sorted depth-first walk
//! ([`walk_files`]) and aggregated in a single streaming pass, so no
//! per-file samples are kept. Nothing is cached: each call re-reads the
//! filesystem.

mod count_files;
mod errors;
mod fs_stats;
mod running_stats;
mod text_stats;
mod total_bytes;
mod walk;

pub use count_files::count_files;
pub use errors::{Result, StatsError};
pub use fs_stats::{folder_summary, FolderSummary};
pub use running_stats::{MeanSd, RunningStats};
pub use text_stats::{alphanumeric_char_stats, count_alphanumeric, word_length_stats, word_lengths};
pub use total_bytes::total_bytes;
pub use walk::{walk_files, FileEntry, FileWalk};
