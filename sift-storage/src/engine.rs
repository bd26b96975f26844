//! StorageEngine: owns the ConnectionPool, implements IDocumentStore,
//! runs migrations at open, checkpoints at close.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use sift_core::config::StorageConfig;
use sift_core::constants::MAX_BULK_BATCH_SIZE;
use sift_core::errors::{SiftError, SiftResult, StorageError};
use sift_core::models::{Document, DocumentSummary};
use sift_core::traits::IDocumentStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{aggregation, document_crud, keyword_search, vector_search};
use crate::to_storage_err;

/// The document store. Opened once per process and shared by reference.
pub struct StorageEngine {
    pool: ConnectionPool,
    closed: AtomicBool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> SiftResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open with explicit pool sizing and busy timeout.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> SiftResult<Self> {
        let mut pool = ConnectionPool::open(path, config.busy_timeout_ms)?;
        pool.writer.with_conn(migrations::run_migrations)?;
        pool.attach_readers(config.read_pool_size, config.busy_timeout_ms)?;
        info!(path = %path.display(), readers = config.read_pool_size, "document store opened");
        Ok(Self {
            pool,
            closed: AtomicBool::new(false),
        })
    }

    /// Open an in-memory storage engine (for testing).
    /// All reads go through the writer since separate in-memory
    /// connections would be isolated databases.
    pub fn open_in_memory() -> SiftResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.writer.with_conn(migrations::run_migrations)?;
        Ok(Self {
            pool,
            closed: AtomicBool::new(false),
        })
    }

    /// Flush the WAL and reject all further calls. Idempotent.
    pub fn close(&self) -> SiftResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        if self.pool.db_path.is_some() {
            self.pool.writer.with_conn(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)")
                    .map_err(|e| to_storage_err(e.to_string()))
            })?;
        }
        info!("document store closed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Current schema version.
    pub fn schema_version(&self) -> SiftResult<u32> {
        self.with_writer(migrations::current_version)
    }

    // --- Ingestion-side writes ---

    /// Insert or replace a document, keyed by url.
    pub fn upsert(&self, document: &Document) -> SiftResult<()> {
        self.with_writer(|conn| document_crud::upsert_document(conn, document))
    }

    /// Upsert many documents atomically.
    pub fn upsert_bulk(&self, documents: &[Document]) -> SiftResult<usize> {
        if documents.len() > MAX_BULK_BATCH_SIZE {
            return Err(SiftError::InvalidArgument(format!(
                "bulk upsert of {} documents exceeds the batch limit of {MAX_BULK_BATCH_SIZE}",
                documents.len()
            )));
        }
        let n = self.with_writer(|conn| document_crud::bulk_upsert(conn, documents))?;
        debug!(documents = n, "bulk upsert committed");
        Ok(n)
    }

    pub fn get(&self, url: &str) -> SiftResult<Option<Document>> {
        self.with_reader(|conn| document_crud::get_document(conn, url))
    }

    pub fn delete(&self, url: &str) -> SiftResult<bool> {
        self.with_writer(|conn| document_crud::delete_document(conn, url))
    }

    fn ensure_open(&self) -> SiftResult<()> {
        if self.is_closed() {
            return Err(StorageError::Closed.into());
        }
        Ok(())
    }

    fn with_writer<F, T>(&self, f: F) -> SiftResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> SiftResult<T>,
    {
        self.ensure_open()?;
        self.pool.writer.with_conn(f)
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer.
    fn with_reader<F, T>(&self, f: F) -> SiftResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> SiftResult<T>,
    {
        self.ensure_open()?;
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IDocumentStore for StorageEngine {
    fn nearest(&self, vector: &[f32], k: usize) -> SiftResult<Vec<(Document, f64)>> {
        self.with_reader(|conn| vector_search::nearest(conn, vector, k))
    }

    fn match_any(&self, keywords: &[String], k: usize) -> SiftResult<Vec<Document>> {
        self.with_reader(|conn| keyword_search::match_any(conn, keywords, k))
    }

    fn count(&self) -> SiftResult<usize> {
        self.with_reader(aggregation::count)
    }

    fn count_matching(&self, topic: &str) -> SiftResult<usize> {
        self.with_reader(|conn| aggregation::count_matching(conn, topic))
    }

    fn count_title_containing(&self, topic: &str) -> SiftResult<usize> {
        self.with_reader(|conn| aggregation::count_title_containing(conn, topic))
    }

    fn count_by_source(&self) -> SiftResult<Vec<(String, usize)>> {
        self.with_reader(aggregation::count_by_source)
    }

    fn created_range(&self) -> SiftResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        self.with_reader(aggregation::created_range)
    }

    fn list_recent(&self, limit: usize) -> SiftResult<Vec<DocumentSummary>> {
        self.with_reader(|conn| aggregation::list_recent(conn, limit))
    }
}
