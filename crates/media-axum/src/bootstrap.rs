//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The `SQLite` repositories are instantiated here
//! and handed to the service behind their port traits.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use media_core::MediaService;
use media_db::{CoreFactory, SqlitePool, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Default bind host.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 5080;
    /// Default database file, relative to the working directory.
    pub const DEFAULT_DATABASE: &'static str = "media-catalog.db";

    /// Create config with default host, port and database path.
    pub fn with_defaults() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            database_path: PathBuf::from(Self::DEFAULT_DATABASE),
            cors: CorsConfig::AllowAll,
        }
    }

    /// Restrict CORS to the given origins. An empty list keeps `AllowAll`.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Context holding the wired catalog service.
pub struct AxumContext {
    /// Catalog service over `SQLite` repositories.
    pub media: Arc<MediaService>,
}

impl AxumContext {
    /// Wire the service over an already-initialized pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            media: Arc::new(CoreFactory::build_media_service(pool)),
        }
    }
}

/// Bootstrap the Axum context: open the database and wire the service.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(database_path = %config.database_path.display(), "opening catalog database");
    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::from_pool(pool))
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("media catalog listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("media catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ServerConfig::with_defaults();
        assert_eq!(config.bind_addr(), "127.0.0.1:5080");
        assert_eq!(config.database_path, PathBuf::from("media-catalog.db"));
        assert_eq!(config.cors, CorsConfig::AllowAll);
    }

    #[test]
    fn empty_origin_list_keeps_allow_all() {
        let config = ServerConfig::with_defaults().with_allowed_origins(Vec::new());
        assert_eq!(config.cors, CorsConfig::AllowAll);

        let config = ServerConfig::with_defaults()
            .with_allowed_origins(vec!["http://localhost:3000".to_string()]);
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://localhost:3000".to_string()])
        );
    }
}
