//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `TEXTFS_*` environment variables.

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `TEXTFS_PORT=9000`
pub const ENV_PREFIX: &str = "TEXTFS";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Directory request paths are resolved against
    pub root_dir: PathBuf,
    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            root_dir: PathBuf::from("."),
            log_json: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration, reading `file` when given
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = ApiConfig::default();

        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("root_dir", defaults.root_dir.display().to_string())?
            .set_default("log_json", defaults.log_json)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("building configuration")?;

        config
            .try_deserialize()
            .context("invalid configuration values")
    }
}
