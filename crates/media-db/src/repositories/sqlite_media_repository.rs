//! `SQLite` implementation of the `MediaRepository` trait.

use async_trait::async_trait;

use media_core::{MediaItem, MediaRepository, RepositoryError};

use super::row_mappers::SqlEntity;
use super::{SqliteRepository, storage_error};

/// `SQLite` repository for catalog entries.
///
/// The generic CRUD set comes from [`SqliteRepository`]; this adds the
/// title and media type filters.
pub type SqliteMediaRepository = SqliteRepository<MediaItem>;

#[async_trait]
impl MediaRepository for SqliteMediaRepository {
    async fn get_by_title(&self, title: &str) -> Result<Vec<MediaItem>, RepositoryError> {
        let sql = Self::select_sql(Some("title = ?"));

        let rows = sqlx::query(&sql)
            .bind(title)
            .fetch_all(self.pool())
            .await
            .map_err(storage_error)?;

        rows.iter().map(MediaItem::from_row).collect()
    }

    async fn get_by_media_type_id(
        &self,
        media_type_id: i64,
    ) -> Result<Vec<MediaItem>, RepositoryError> {
        let sql = Self::select_sql(Some("media_type_id = ?"));

        let rows = sqlx::query(&sql)
            .bind(media_type_id)
            .fetch_all(self.pool())
            .await
            .map_err(storage_error)?;

        rows.iter().map(MediaItem::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TestDb;
    use media_core::{Entity, Repository};

    fn item(title: &str, media_type_id: i64) -> MediaItem {
        MediaItem::new(
            title,
            "Test Genre",
            "Test ImageUrl",
            "Test Description",
            media_type_id,
        )
    }

    #[tokio::test]
    async fn add_then_get_all_returns_stored_fields() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let repo = db.media_repository();

        let added = repo.add(&item("Test Title", movie.id)).await.unwrap();
        let all = repo.get_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0], added);
        assert_eq!(all[0].title, "Test Title");
        assert_eq!(all[0].genre, "Test Genre");
        // The store does not validate: a malformed URL is persisted as given.
        assert_eq!(all[0].image_url, "Test ImageUrl");
        assert_eq!(all[0].description, "Test Description");
        assert_eq!(all[0].media_type_id, movie.id);
    }

    #[tokio::test]
    async fn get_all_returns_every_item_and_is_repeatable() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let book = db.seed_media_type("Book").await.unwrap();
        let repo = db.media_repository();

        repo.add(&item("Test Title 1", movie.id)).await.unwrap();
        repo.add(&item("Test Title 2", book.id)).await.unwrap();

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(first.iter().any(|m| m.title == "Test Title 1"));
        assert!(first.iter().any(|m| m.title == "Test Title 2"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn update_changes_stored_row() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let repo = db.media_repository();

        let mut stored = repo.add(&item("Test Title", movie.id)).await.unwrap();
        stored.title = "Updated Title".to_string();
        repo.update(&stored).await.unwrap();

        let fetched = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Updated Title");
    }

    #[tokio::test]
    async fn remove_deletes_row() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let repo = db.media_repository();

        let stored = repo.add(&item("Test Title", movie.id)).await.unwrap();
        repo.remove(&stored).await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mutations_on_empty_table_fail_with_concurrency_error() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_repository();
        let ghost = item("Test Title", 1).with_id(1);

        assert!(matches!(
            repo.update(&ghost).await,
            Err(RepositoryError::Concurrency(_))
        ));
        assert!(matches!(
            repo.remove(&ghost).await,
            Err(RepositoryError::Concurrency(_))
        ));
    }

    #[tokio::test]
    async fn get_by_id_for_unknown_id_is_none() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_repository();

        assert!(repo.get_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_by_title_returns_all_exact_matches() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let repo = db.media_repository();

        for _ in 0..3 {
            repo.add(&item("Test Title", movie.id)).await.unwrap();
        }
        repo.add(&item("Test Title Extended", movie.id)).await.unwrap();

        let matches = repo.get_by_title("Test Title").await.unwrap();
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.title == "Test Title"));

        assert!(repo.get_by_title("Missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_media_type_id_filters_by_reference() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let book = db.seed_media_type("Book").await.unwrap();
        let repo = db.media_repository();

        repo.add(&item("Test Title 1", movie.id)).await.unwrap();
        repo.add(&item("Test Title 2", movie.id)).await.unwrap();
        repo.add(&item("Test Title 3", book.id)).await.unwrap();

        let movies = repo.get_by_media_type_id(movie.id).await.unwrap();
        assert_eq!(movies.len(), 2);
        assert!(movies.iter().all(|m| m.media_type_id == movie.id));

        assert!(repo.get_by_media_type_id(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_name_matches_title() {
        let db = TestDb::new().await.unwrap();
        let movie = db.seed_media_type("Movie").await.unwrap();
        let repo = db.media_repository();

        let stored = repo.add(&item("Test Title", movie.id)).await.unwrap();

        assert_eq!(repo.get_by_name("Test Title").await.unwrap(), Some(stored));
    }
}
