//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pooled handle and the upload directory is a
//! small string.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory where submitted schedule PDFs are written.
    pub upload_dir: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, upload_dir: String) -> Self {
        Self { db, upload_dir }
    }
}
