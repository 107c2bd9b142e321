//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the composed repositories
//! through `CliContext`.

use std::path::PathBuf;

use anyhow::Result;
use media_core::Repos;
use media_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `SQLite` database file.
    pub database_path: PathBuf,
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    repos: Repos,
}

impl CliContext {
    /// Repository container shared by the handlers.
    pub const fn repos(&self) -> &Repos {
        &self.repos
    }
}

/// Open the database and wire the repositories.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    Ok(CliContext {
        repos: CoreFactory::build_repos(pool),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let database_path = dir.path().join("catalog.db");
        let config = CliConfig {
            database_path: database_path.clone(),
        };

        let media_types = tokio_test::block_on(async {
            let ctx = bootstrap(&config).await.unwrap();
            ctx.repos().media_types.get_all().await.unwrap()
        });

        assert!(media_types.is_empty());
        assert!(database_path.exists());
    }
}
