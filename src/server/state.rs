//! Application state shared across all request handlers.
//!
//! The state is built once in `main` after the database is connected and migrated,
//! then cloned into each handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::query::params::QueryOptions;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `QueryOptions` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Page-size bounds applied to every list endpoint.
    pub query_options: QueryOptions,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `query_options` - Default and maximum page sizes for list endpoints
    pub fn new(db: DatabaseConnection, query_options: QueryOptions) -> Self {
        Self { db, query_options }
    }
}
