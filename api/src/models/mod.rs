//! API Models Module
//!
//! Request and response bodies for the HTTP endpoints.

use serde::{Deserialize, Serialize};
use textfs::{MeanSd, OperationResult};

/// Form body accepted by POST/PUT on `/files/*path`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentsForm {
    /// New file contents; absent when the client sent no `contents` field
    pub contents: Option<String>,
}

/// Response for every file operation
///
/// `contents` is the file body on success and the error message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResponse {
    pub path: String,
    pub contents: String,
    pub error: bool,
}

impl FileResponse {
    pub fn new(path: String, outcome: OperationResult) -> Self {
        Self {
            path,
            contents: outcome.contents,
            error: outcome.error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumFilesResponse {
    pub num_files: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalBytesResponse {
    pub total_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvgNumCharsResponse {
    pub avg_num_chars: MeanSd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvgWordLengthResponse {
    pub avg_word_length: MeanSd,
}

/// Body of a non-2xx stats response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
