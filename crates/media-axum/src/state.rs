//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AxumContext`; each request borrows the service
/// and the pool hands it a connection per statement.
pub type AppState = Arc<AxumContext>;
