#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::validation::{
    MediaField, validate_description, validate_genre, validate_image_url, validate_title,
};
pub use domain::{Entity, MediaItem, MediaType};
pub use ports::{
    CoreError, MediaRepository, MediaTypeRepository, Repos, Repository, RepositoryError,
};
pub use services::MediaService;

// Dev-dependencies used only by some test modules
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
