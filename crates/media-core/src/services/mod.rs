//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain rules.
//! They don't know about concrete implementations.

mod media_service;

pub use media_service::MediaService;
