//! Connection pool managing read/write connections.

pub mod functions;
pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use sift_core::errors::SiftResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` in in-memory mode, where separate connections would each see
    /// their own empty database.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer for the given database file. Readers are attached
    /// separately once migrations have created the schema.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> SiftResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool (for testing). All reads go through the writer.
    pub fn open_in_memory() -> SiftResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Attach `size` read-only connections to the file-backed database.
    pub fn attach_readers(&mut self, size: usize, busy_timeout_ms: u32) -> SiftResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(ReadPool::open(path, size, busy_timeout_ms)?);
        }
        Ok(())
    }
}
