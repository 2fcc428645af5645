//! textfs API Module
//!
//! HTTP endpoints over the textfs file tools and stats tools: one route
//! family for file resources, one for folder statistics.

pub mod config;
pub mod handlers;
pub mod models;
pub mod server;
pub mod telemetry;

pub use crate::config::ApiConfig;
pub use handlers::*;
pub use models::*;
pub use server::*;
