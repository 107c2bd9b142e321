//! `SQLite` implementation of the `MediaTypeRepository` trait.

use media_core::{MediaType, MediaTypeRepository};

use super::SqliteRepository;

/// `SQLite` repository for the media type reference table.
///
/// The generic CRUD set is all the catalog needs from media types.
pub type SqliteMediaTypeRepository = SqliteRepository<MediaType>;

impl MediaTypeRepository for SqliteMediaTypeRepository {}
