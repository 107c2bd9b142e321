//! Table descriptions and row mapping for `SQLite` queries.
//!
//! Each persisted entity describes its table once through [`SqlEntity`];
//! the generic repository derives all of its SQL from that description.

use media_core::{Entity, MediaItem, MediaType, RepositoryError};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

use super::storage_error;

/// A `sqlx` query over `SQLite` with positional arguments.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// An entity stored in a table with an `INTEGER PRIMARY KEY` named `id`.
pub trait SqlEntity: Entity + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Data columns in binding order, excluding `id`.
    const COLUMNS: &'static [&'static str];

    /// Column matched by `get_by_name`. Must agree with [`Entity::name`].
    const NAME_COLUMN: &'static str;

    /// Decode a row selected with [`select_columns`].
    fn from_row(row: &SqliteRow) -> Result<Self, RepositoryError>;

    /// Bind the data columns, in [`SqlEntity::COLUMNS`] order.
    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// `id` followed by the data columns.
pub fn select_columns<T: SqlEntity>() -> String {
    format!("id, {}", T::COLUMNS.join(", "))
}

fn column<'r, V>(row: &'r SqliteRow, name: &str) -> Result<V, RepositoryError>
where
    V: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name).map_err(storage_error)
}

impl SqlEntity for MediaItem {
    const TABLE: &'static str = "media_items";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "genre",
        "image_url",
        "description",
        "media_type_id",
    ];
    const NAME_COLUMN: &'static str = "title";

    fn from_row(row: &SqliteRow) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: column(row, "id")?,
            title: column(row, "title")?,
            genre: column(row, "genre")?,
            image_url: column(row, "image_url")?,
            description: column(row, "description")?,
            media_type_id: column(row, "media_type_id")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.title.as_str())
            .bind(self.genre.as_str())
            .bind(self.image_url.as_str())
            .bind(self.description.as_str())
            .bind(self.media_type_id)
    }
}

impl SqlEntity for MediaType {
    const TABLE: &'static str = "media_types";
    const COLUMNS: &'static [&'static str] = &["name"];
    const NAME_COLUMN: &'static str = "name";

    fn from_row(row: &SqliteRow) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: column(row, "id")?,
            name: column(row, "name")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.as_str())
    }
}
