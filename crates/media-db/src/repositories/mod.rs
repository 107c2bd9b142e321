//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_media_repository;
mod sqlite_media_type_repository;
mod sqlite_repository;

use media_core::RepositoryError;

pub use row_mappers::{SqlEntity, SqliteQuery};
pub use sqlite_media_repository::SqliteMediaRepository;
pub use sqlite_media_type_repository::SqliteMediaTypeRepository;
pub use sqlite_repository::SqliteRepository;

/// Map a `sqlx` failure onto the port error type.
pub(crate) fn storage_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}
