//! Composition utilities for wiring `SQLite` repositories.
//!
//! This module provides factory functions for building the repository
//! container with `SQLite` backends. It is focused purely on construction
//! and should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use media_core::{MediaService, Repos};

use crate::repositories::{SqliteMediaRepository, SqliteMediaTypeRepository};

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Self::media_repository(pool.clone()),
            Self::media_type_repository(pool),
        )
    }

    /// Build a `MediaService` over `SQLite` repositories.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let service = MediaService::from_repos(&repos);
    /// ```
    pub fn build_media_service(pool: SqlitePool) -> MediaService {
        MediaService::from_repos(&Self::build_repos(pool))
    }

    /// Create a media repository from a pool.
    pub fn media_repository(pool: SqlitePool) -> Arc<SqliteMediaRepository> {
        Arc::new(SqliteMediaRepository::new(pool))
    }

    /// Create a media type repository from a pool.
    pub fn media_type_repository(pool: SqlitePool) -> Arc<SqliteMediaTypeRepository> {
        Arc::new(SqliteMediaTypeRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a media repository using this test database.
    pub fn media_repository(&self) -> SqliteMediaRepository {
        SqliteMediaRepository::new(self.pool.clone())
    }

    /// Create a media type repository using this test database.
    pub fn media_type_repository(&self) -> SqliteMediaTypeRepository {
        SqliteMediaTypeRepository::new(self.pool.clone())
    }

    /// Insert a media type and return it with its assigned id.
    pub async fn seed_media_type(
        &self,
        name: &str,
    ) -> Result<media_core::MediaType, media_core::RepositoryError> {
        use media_core::Repository;

        self.media_type_repository()
            .add(&media_core::MediaType::new(name))
            .await
    }
}
