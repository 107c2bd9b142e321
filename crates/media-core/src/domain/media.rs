//! Media catalog domain types.
//!
//! These types represent catalog entries independent of any
//! infrastructure concerns (database, HTTP, etc.).

use serde::{Deserialize, Serialize};

use super::entity::Entity;

// ─────────────────────────────────────────────────────────────────────────────
// Media Items
// ─────────────────────────────────────────────────────────────────────────────

/// A catalog entry.
///
/// The same type is used for payloads and persisted rows. On insert the
/// store assigns `id` and whatever the caller supplied is discarded; on
/// update and remove `id` selects the row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Database ID (0 for payloads that have not been persisted yet).
    #[serde(default)]
    pub id: i64,
    /// Display title. Not unique across the catalog.
    pub title: String,
    /// Free-form genre label (e.g. "Science Fiction").
    pub genre: String,
    /// Absolute URL of the cover image.
    pub image_url: String,
    /// Long-form description.
    pub description: String,
    /// Reference to [`MediaType::id`].
    pub media_type_id: i64,
}

impl MediaItem {
    /// Create an unsaved media item.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        media_type_id: i64,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            genre: genre.into(),
            image_url: image_url.into(),
            description: description.into(),
            media_type_id,
        }
    }
}

impl Entity for MediaItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Media items are named by their title.
    fn name(&self) -> &str {
        &self.title
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Media Types
// ─────────────────────────────────────────────────────────────────────────────

/// Reference entity classifying media items (e.g. "Movie", "Book").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaType {
    /// Database ID.
    #[serde(default)]
    pub id: i64,
    /// Human-readable label.
    pub name: String,
}

impl MediaType {
    /// Create an unsaved media type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

impl Entity for MediaType {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    fn name(&self) -> &str {
        &self.name
    }
}
