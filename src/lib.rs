//! textfs: text files as addressable resources, plus folder statistics
//!
//! Two independent, synchronous building blocks over the real filesystem:
//! - [`file_tools`] create/read/replace/delete a single file
//! - [`stats_tools`] aggregate statistics over a directory subtree
//!
//! The HTTP surface lives in the `textfs-api` crate.

pub mod file_tools;
pub mod stats_tools;

// Re-export file tools for convenience
pub use file_tools::{
    file_create, file_delete, file_read, file_update, OperationResult, ResourceError,
    ResourceStore,
};

// Re-export stats tools
pub use stats_tools::{
    alphanumeric_char_stats, count_files, folder_summary, total_bytes, word_length_stats,
    FolderSummary, MeanSd, StatsError,
};
