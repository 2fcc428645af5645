//! API Server Module
//!
//! This module contains the server setup functionality for the API system.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use textfs::ResourceStore;

use crate::config::ApiConfig;
use crate::handlers::{
    avg_num_chars, avg_word_length, create_file, delete_file, health_check, num_files, read_file,
    summary, total_bytes, update_file, ApiState,
};

/// Build the application router over shared state
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // File operations
        .route(
            "/files/*path",
            get(read_file)
                .post(create_file)
                .put(update_file)
                .delete(delete_file),
        )
        // Folder statistics
        .route("/stats/num_files/*path", get(num_files))
        .route("/stats/avg_num_chars/*path", get(avg_num_chars))
        .route("/stats/avg_word_length/*path", get(avg_word_length))
        .route("/stats/total_bytes/*path", get(total_bytes))
        .route("/stats/summary/*path", get(summary))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main API server
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Shared state
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a new API server rooted at the configured directory
    pub fn new(config: ApiConfig) -> Self {
        let state = Arc::new(ApiState::new(ResourceStore::new(config.root_dir.clone())));
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Start the API server and run until ctrl-c
    pub async fn start(&self) -> Result<()> {
        info!(
            "Starting textfs API server on {}:{} (root: {})",
            self.config.host,
            self.config.port,
            self.config.root_dir.display()
        );

        let listener = tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| format!("binding {}:{}", self.config.host, self.config.port))?;
        info!("textfs API server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run API server: {}", e))?;

        info!("textfs API server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("ctrl-c received; shutting down");
}
