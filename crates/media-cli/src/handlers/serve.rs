//! Serve command handler.

use std::path::PathBuf;

use anyhow::Result;
use media_axum::{ServerConfig, start_server};

/// Resolve the server configuration from parsed arguments.
pub fn server_config(
    database_path: PathBuf,
    host: String,
    port: u16,
    allow_origins: Vec<String>,
) -> ServerConfig {
    ServerConfig {
        host,
        port,
        database_path,
        ..ServerConfig::with_defaults()
    }
    .with_allowed_origins(allow_origins)
}

/// Execute the serve command. Blocks until the server shuts down.
pub async fn execute(config: ServerConfig) -> Result<()> {
    start_server(config).await
}
