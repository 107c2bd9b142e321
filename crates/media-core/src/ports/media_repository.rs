//! Media repository trait definitions.

use async_trait::async_trait;

use super::{Repository, RepositoryError};
use crate::domain::{MediaItem, MediaType};

/// Repository for catalog entries.
///
/// Adds two filter queries to the generic CRUD set. Both return every
/// match (titles are not unique) and perform no validation; callers
/// validate the criterion first.
#[async_trait]
pub trait MediaRepository: Repository<MediaItem> {
    /// All items whose title equals `title` exactly.
    async fn get_by_title(&self, title: &str) -> Result<Vec<MediaItem>, RepositoryError>;

    /// All items referencing the given media type.
    async fn get_by_media_type_id(
        &self,
        media_type_id: i64,
    ) -> Result<Vec<MediaItem>, RepositoryError>;
}

/// Repository for the media type reference table.
///
/// The catalog only uses it for existence checks via `get_by_id`.
pub trait MediaTypeRepository: Repository<MediaType> {}
