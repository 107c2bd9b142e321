//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - One generic CRUD trait shared by every entity; entity-specific
//!   repositories extend it with queries only

pub mod media_repository;
pub mod repository;

use std::sync::Arc;
use thiserror::Error;

pub use media_repository::{MediaRepository, MediaTypeRepository};
pub use repository::Repository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations.
///
/// # Example
///
/// ```ignore
/// // In media-db factory:
/// pub fn build_repos(pool: SqlitePool) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = media_db::CoreFactory::build_repos(pool);
/// let service = MediaService::new(repos.media, repos.media_types);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Catalog entries.
    pub media: Arc<dyn MediaRepository>,
    /// Media type reference table.
    pub media_types: Arc<dyn MediaTypeRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        media: Arc<dyn MediaRepository>,
        media_types: Arc<dyn MediaTypeRepository>,
    ) -> Self {
        Self { media, media_types }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A mutation targeted a row that does not exist (nothing to update or delete).
    #[error("Concurrency conflict: {0}")]
    Concurrency(String),

    /// Storage backend error (connectivity, SQL, row decoding).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field, criterion or whole entity failed its rule.
    #[error("{0}")]
    Validation(String),

    /// Repository operation failed. Passed through untranslated.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// Whether this is a client-side validation failure.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
