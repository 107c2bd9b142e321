//! Generic repository trait definition.
//!
//! This port defines identity-keyed persistence for any [`Entity`].
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Entity;

/// Identity-keyed CRUD over a single entity type.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Absence on reads is `Ok(None)` / an empty `Vec`, never an error
/// - Every mutation is durable before the call returns
/// - `update` and `remove` fail with [`RepositoryError::Concurrency`] when
///   no row matches the entity's identity
/// - The storage layer enforces no domain invariants
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every stored row, ordered by id.
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Point lookup by identity.
    async fn get_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError>;

    /// First row (lowest id) whose [`Entity::name`] attribute equals `name`.
    async fn get_by_name(&self, name: &str) -> Result<Option<T>, RepositoryError>;

    /// Insert a new row and commit.
    ///
    /// The store assigns the identity; the returned entity carries it.
    async fn add(&self, entity: &T) -> Result<T, RepositoryError>;

    /// Overwrite the row matching `entity.id()` and commit.
    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Delete the row matching `entity.id()` and commit.
    async fn remove(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Explicit durability checkpoint for callers that batch mutations.
    async fn save_changes(&self) -> Result<(), RepositoryError>;
}
