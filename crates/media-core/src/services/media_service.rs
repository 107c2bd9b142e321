//! Media service - validation-gated catalog operations.

use std::sync::Arc;

use crate::domain::validation::{
    MediaField, validate_description, validate_genre, validate_image_url, validate_title,
};
use crate::domain::MediaItem;
use crate::ports::{CoreError, MediaRepository, MediaTypeRepository, Repos};

/// Service for catalog operations.
///
/// Every write and every lookup-by-criterion runs its validation first and
/// never touches the media repository when validation fails. Plain reads
/// pass through unchecked. Repository errors are propagated untranslated.
pub struct MediaService {
    media: Arc<dyn MediaRepository>,
    media_types: Arc<dyn MediaTypeRepository>,
}

impl MediaService {
    /// Create a new media service over the given repositories.
    pub fn new(
        media: Arc<dyn MediaRepository>,
        media_types: Arc<dyn MediaTypeRepository>,
    ) -> Self {
        Self { media, media_types }
    }

    /// Create a media service from a wired repository container.
    pub fn from_repos(repos: &Repos) -> Self {
        Self::new(repos.media.clone(), repos.media_types.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// List every media item.
    pub async fn get_media_items(&self) -> Result<Vec<MediaItem>, CoreError> {
        Ok(self.media.get_all().await?)
    }

    /// Get a media item by id. Absence is not an error.
    pub async fn get_media_item_by_id(&self, id: i64) -> Result<Option<MediaItem>, CoreError> {
        Ok(self.media.get_by_id(id).await?)
    }

    /// All media items with exactly this title.
    pub async fn get_media_items_with_title(
        &self,
        title: &str,
    ) -> Result<Vec<MediaItem>, CoreError> {
        if !validate_title(title) {
            return Err(invalid(MediaField::Title));
        }
        Ok(self.media.get_by_title(title).await?)
    }

    /// All media items of a media type. The media type must exist.
    pub async fn get_media_items_by_media_type(
        &self,
        media_type_id: i64,
    ) -> Result<Vec<MediaItem>, CoreError> {
        if !self.validate_media_type(media_type_id).await? {
            return Err(invalid(MediaField::MediaType));
        }
        Ok(self.media.get_by_media_type_id(media_type_id).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and insert a media item. Returns it with its assigned id.
    pub async fn add_media_item(&self, item: &MediaItem) -> Result<MediaItem, CoreError> {
        self.ensure_valid(item).await?;
        Ok(self.media.add(item).await?)
    }

    /// Validate and overwrite the stored row with `item.id`.
    pub async fn update_media_item(&self, item: &MediaItem) -> Result<(), CoreError> {
        self.ensure_valid(item).await?;
        Ok(self.media.update(item).await?)
    }

    /// Validate and delete the stored row with `item.id`.
    ///
    /// The whole payload is validated, not just the identity. A stored row
    /// that no longer satisfies the field rules cannot be removed here.
    pub async fn remove_media_item(&self, item: &MediaItem) -> Result<(), CoreError> {
        self.ensure_valid(item).await?;
        Ok(self.media.remove(item).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether a media type with this id exists.
    pub async fn validate_media_type(&self, media_type_id: i64) -> Result<bool, CoreError> {
        Ok(self.media_types.get_by_id(media_type_id).await?.is_some())
    }

    /// Whether every field rule holds for `item`.
    pub async fn validate_media_item(&self, item: &MediaItem) -> Result<bool, CoreError> {
        Ok(self.first_invalid_field(item).await?.is_none())
    }

    /// The first field that fails its rule, checked in the order title,
    /// genre, media type, image URL, description. Stops at the first failure,
    /// so the media type lookup only happens once the text fields before it
    /// pass.
    pub async fn first_invalid_field(
        &self,
        item: &MediaItem,
    ) -> Result<Option<MediaField>, CoreError> {
        if !validate_title(&item.title) {
            return Ok(Some(MediaField::Title));
        }
        if !validate_genre(&item.genre) {
            return Ok(Some(MediaField::Genre));
        }
        if !self.validate_media_type(item.media_type_id).await? {
            return Ok(Some(MediaField::MediaType));
        }
        if !validate_image_url(&item.image_url) {
            return Ok(Some(MediaField::ImageUrl));
        }
        if !validate_description(&item.description) {
            return Ok(Some(MediaField::Description));
        }
        Ok(None)
    }

    async fn ensure_valid(&self, item: &MediaItem) -> Result<(), CoreError> {
        match self.first_invalid_field(item).await? {
            Some(field) => Err(invalid(field)),
            None => Ok(()),
        }
    }
}

fn invalid(field: MediaField) -> CoreError {
    CoreError::Validation(field.invalid_message())
}
