//! textfs-server: serve a directory of text files over HTTP

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use textfs_api::{telemetry, ApiConfig, ApiServer};

/// Text files as HTTP resources, with recursive folder statistics
#[derive(Parser, Debug)]
#[command(name = "textfs-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "TEXTFS_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory request paths resolve against (overrides config)
    #[arg(short, long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ApiConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(root) = cli.root {
        config.root_dir = root;
    }

    telemetry::init(config.log_json);
    tracing::debug!(?config, "configuration loaded");

    ApiServer::new(config).start().await
}
