//! API Handlers Module
//!
//! This module contains the request handlers for the API system. Each
//! handler moves its filesystem work onto the blocking pool and serializes
//! the result.

use axum::{
    debug_handler,
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Form,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use textfs::file_tools::{OperationResult, ResourceError, ResourceStore};
use textfs::stats_tools::{self, FolderSummary, StatsError};

use crate::models::{
    AvgNumCharsResponse, AvgWordLengthResponse, ContentsForm, ErrorResponse, FileResponse,
    NumFilesResponse, TotalBytesResponse,
};

/// Represents the state of the API server
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Files addressed by request path
    pub store: ResourceStore,
}

impl ApiState {
    pub fn new(store: ResourceStore) -> Self {
        Self { store }
    }
}

/// Errors returned by the stats endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Stats(StatsError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Stats(StatsError::InsufficientSamples { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Stats(StatsError::Io { .. }) | ApiError::Task(_) => {
                tracing::error!("Stats request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Run filesystem work off the async runtime
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::Task(e.to_string()))
}

/// Run a file operation and wrap it in the response envelope
async fn file_operation<F>(path: String, op: F) -> Json<FileResponse>
where
    F: FnOnce() -> Result<String, ResourceError> + Send + 'static,
{
    let outcome = match blocking(op).await {
        Ok(result) => OperationResult::from(result),
        Err(e) => {
            tracing::error!("File operation on {} failed: {}", path, e);
            OperationResult::failed(&ResourceError::Io(e.to_string()))
        }
    };

    if outcome.error {
        tracing::debug!("File operation on {} rejected: {}", path, outcome.contents);
    }

    Json(FileResponse::new(path, outcome))
}

/// Contents from a form body, or `None` if the body is missing or not a form
fn form_contents(form: Result<Form<ContentsForm>, FormRejection>) -> Option<String> {
    match form {
        Ok(Form(form)) => form.contents,
        Err(rejection) => {
            tracing::debug!("Unusable contents payload: {}", rejection);
            None
        }
    }
}

/// Health check endpoint
#[debug_handler]
pub async fn health_check() -> Json<HashMap<String, String>> {
    let mut response = HashMap::new();
    response.insert("status".to_string(), "healthy".to_string());
    response.insert("service".to_string(), "textfs-api".to_string());
    Json(response)
}

/// Read a file
#[debug_handler]
pub async fn read_file(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Json<FileResponse> {
    tracing::debug!("Reading file: {}", path);

    let request_path = path.clone();
    file_operation(path, move || state.store.read(&request_path)).await
}

/// Create a file, along with any missing parent directories
#[debug_handler]
pub async fn create_file(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
    form: Result<Form<ContentsForm>, FormRejection>,
) -> Json<FileResponse> {
    tracing::debug!("Creating file: {}", path);

    let contents = form_contents(form);
    let request_path = path.clone();
    file_operation(path, move || {
        state.store.create(&request_path, contents.as_deref())
    })
    .await
}

/// Replace the contents of an existing file
#[debug_handler]
pub async fn update_file(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
    form: Result<Form<ContentsForm>, FormRejection>,
) -> Json<FileResponse> {
    tracing::debug!("Updating file: {}", path);

    let contents = form_contents(form);
    let request_path = path.clone();
    file_operation(path, move || {
        state.store.update(&request_path, contents.as_deref())
    })
    .await
}

/// Delete a file
#[debug_handler]
pub async fn delete_file(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Json<FileResponse> {
    tracing::debug!("Deleting file: {}", path);

    let request_path = path.clone();
    file_operation(path, move || state.store.delete(&request_path)).await
}

/// Number of files beneath a path
#[debug_handler]
pub async fn num_files(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<NumFilesResponse>, ApiError> {
    let root = state.store.resolve(&path);
    let num_files = blocking(move || stats_tools::count_files(&root)).await??;
    Ok(Json(NumFilesResponse { num_files }))
}

/// Mean/sd of alphanumeric characters per file beneath a path
#[debug_handler]
pub async fn avg_num_chars(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<AvgNumCharsResponse>, ApiError> {
    let root = state.store.resolve(&path);
    let avg_num_chars = blocking(move || stats_tools::alphanumeric_char_stats(&root)).await??;
    Ok(Json(AvgNumCharsResponse { avg_num_chars }))
}

/// Mean/sd of word length across all files beneath a path
#[debug_handler]
pub async fn avg_word_length(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<AvgWordLengthResponse>, ApiError> {
    let root = state.store.resolve(&path);
    let avg_word_length = blocking(move || stats_tools::word_length_stats(&root)).await??;
    Ok(Json(AvgWordLengthResponse { avg_word_length }))
}

/// Total bytes stored beneath a path
#[debug_handler]
pub async fn total_bytes(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<TotalBytesResponse>, ApiError> {
    let root = state.store.resolve(&path);
    let total_bytes = blocking(move || stats_tools::total_bytes(&root)).await??;
    Ok(Json(TotalBytesResponse { total_bytes }))
}

/// All folder statistics from one walk
#[debug_handler]
pub async fn summary(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
) -> Result<Json<FolderSummary>, ApiError> {
    let root = state.store.resolve(&path);
    let summary = blocking(move || stats_tools::folder_summary(&root)).await??;
    Ok(Json(summary))
}
