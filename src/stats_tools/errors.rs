use std::io;
use thiserror::Error;

/// Errors that can occur while aggregating folder statistics
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Path does not exist: {0}")]
    NotFound(String),

    /// Sample standard deviation is undefined below two samples
    #[error("Need at least {required} samples, found {found}")]
    InsufficientSamples { found: u64, required: u64 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StatsError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        StatsError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for stats operations
pub type Result<T> = std::result::Result<T, StatsError>;
