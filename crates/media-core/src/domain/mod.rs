//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `entity` - The `Entity` capability used by the generic repository
//! - `media` - Catalog types (`MediaItem`, `MediaType`)
//! - `validation` - Field rules for media items

mod entity;
mod media;
pub mod validation;

pub use entity::Entity;
pub use media::{MediaItem, MediaType};
