//! # sift-storage
//!
//! SQLite persistence for the document corpus. Owns the connection pool,
//! schema migrations, and every SQL statement the retrieval core depends on.
//!
//! ## Architecture
//!
//! ```text
//! StorageEngine (IDocumentStore)
//! ├── ConnectionPool
//! │   ├── WriteConnection (single, serialized)
//! │   └── ReadPool (round-robin, query_only)
//! ├── Migrations (PRAGMA user_version)
//! └── Queries
//!     ├── document_crud (upsert / get / delete)
//!     ├── vector_search (cosine distance scan)
//!     ├── keyword_search (bound-parameter substring match)
//!     └── aggregation (counts, ranges, listings)
//! ```

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use sift_core::errors::{SiftError, StorageError};

/// Wrap a SQLite failure message in the workspace error type.
pub(crate) fn to_storage_err(message: String) -> SiftError {
    StorageError::SqliteError { message }.into()
}
