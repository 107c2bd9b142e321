//! Generic `SQLite` implementation of the `Repository` trait.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::SqlitePool;

use media_core::{Repository, RepositoryError};

use super::row_mappers::{SqlEntity, select_columns};
use super::storage_error;

/// `SQLite` repository for any [`SqlEntity`].
///
/// Every statement runs on its own pooled connection and commits before
/// the call returns. There is no unit of work spanning calls.
pub struct SqliteRepository<T> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: SqlEntity> SqliteRepository<T> {
    /// Create a new `SQLite` repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// `SELECT id, <columns> FROM <table>` with an optional `WHERE` clause.
    pub(crate) fn select_sql(filter: Option<&str>) -> String {
        let base = format!("SELECT {} FROM {}", select_columns::<T>(), T::TABLE);
        match filter {
            Some(clause) => format!("{base} WHERE {clause} ORDER BY id"),
            None => format!("{base} ORDER BY id"),
        }
    }

    fn missing_row(id: i64) -> RepositoryError {
        RepositoryError::Concurrency(format!("{} row with id {id} does not exist", T::TABLE))
    }
}

#[async_trait]
impl<T: SqlEntity> Repository<T> for SqliteRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        let sql = Self::select_sql(None);

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(T::from_row).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        let sql = Self::select_sql(Some("id = ?"));

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(T::from_row).transpose()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<T>, RepositoryError> {
        let sql = format!(
            "{} LIMIT 1",
            Self::select_sql(Some(&format!("{} = ?", T::NAME_COLUMN)))
        );

        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(T::from_row).transpose()
    }

    async fn add(&self, entity: &T) -> Result<T, RepositoryError> {
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            T::TABLE,
            T::COLUMNS.join(", ")
        );

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        let id = result.last_insert_rowid();
        tracing::debug!(table = T::TABLE, id, "inserted row");

        Ok(entity.clone().with_id(id))
    }

    async fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {assignments} WHERE id = ?", T::TABLE);

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(Self::missing_row(entity.id()));
        }

        tracing::debug!(table = T::TABLE, id = entity.id(), "updated row");
        Ok(())
    }

    async fn remove(&self, entity: &T) -> Result<(), RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);

        let result = sqlx::query(&sql)
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(Self::missing_row(entity.id()));
        }

        tracing::debug!(table = T::TABLE, id = entity.id(), "deleted row");
        Ok(())
    }

    async fn save_changes(&self) -> Result<(), RepositoryError> {
        // Each mutation commits its own statement, so nothing is pending.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TestDb;
    use media_core::{Entity, MediaType};

    #[tokio::test]
    async fn get_all_on_empty_table_is_empty() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_type_repository();

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_assigns_id_and_ignores_supplied_one() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_type_repository();

        let first = repo.add(&MediaType::new("Movie").with_id(500)).await.unwrap();
        let second = repo.add(&MediaType::new("Book")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_by_id(2).await.unwrap(), Some(second));
        assert!(repo.get_by_id(500).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_by_name_returns_first_match() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_type_repository();

        let movie = repo.add(&MediaType::new("Movie")).await.unwrap();
        repo.add(&MediaType::new("Movie")).await.unwrap();

        assert_eq!(repo.get_by_name("Movie").await.unwrap(), Some(movie));
        assert!(repo.get_by_name("Podcast").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_remove_missing_row_are_concurrency_errors() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_type_repository();
        let ghost = MediaType::new("Ghost").with_id(42);

        let update = repo.update(&ghost).await;
        assert!(matches!(update, Err(RepositoryError::Concurrency(_))));

        let remove = repo.remove(&ghost).await;
        assert!(matches!(remove, Err(RepositoryError::Concurrency(_))));
    }

    #[tokio::test]
    async fn update_then_remove_round_trip() {
        let db = TestDb::new().await.unwrap();
        let repo = db.media_type_repository();

        let mut kind = repo.add(&MediaType::new("Serie")).await.unwrap();
        kind.name = "Series".to_string();
        repo.update(&kind).await.unwrap();
        assert_eq!(repo.get_by_id(kind.id).await.unwrap(), Some(kind.clone()));

        repo.remove(&kind).await.unwrap();
        assert!(repo.get_by_id(kind.id).await.unwrap().is_none());
        repo.save_changes().await.unwrap();
    }

    #[test]
    fn select_sql_orders_by_id() {
        assert_eq!(
            SqliteRepository::<MediaType>::select_sql(Some("name = ?")),
            "SELECT id, name FROM media_types WHERE name = ? ORDER BY id"
        );
    }
}
