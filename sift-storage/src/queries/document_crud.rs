//! Upsert, get, delete, bulk ops for documents.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use sift_core::errors::{SiftResult, StorageError};
use sift_core::models::Document;

use crate::to_storage_err;

/// Columns read back for search results. The embedding blob is never
/// loaded on read paths.
pub(crate) const DOCUMENT_COLUMNS: &str = "id, url, title, content, source, created_at";

/// Insert or replace a document by url. Re-ingesting a url keeps its row id
/// (and therefore its discovery order) and replaces everything else.
pub fn upsert_document(conn: &Connection, document: &Document) -> SiftResult<()> {
    let blob = if document.embedding.is_empty() {
        None
    } else {
        Some(f32_vec_to_bytes(&document.embedding))
    };

    conn.execute(
        "INSERT INTO documents (url, title, content, source, embedding, dimensions, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(url) DO UPDATE SET
            title = excluded.title,
            content = excluded.content,
            source = excluded.source,
            embedding = excluded.embedding,
            dimensions = excluded.dimensions,
            created_at = excluded.created_at",
        params![
            document.url,
            document.title,
            document.content,
            document.source,
            blob,
            document.embedding.len() as i64,
            format_timestamp(&document.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Upsert many documents in one transaction: all or nothing.
pub fn bulk_upsert(conn: &Connection, documents: &[Document]) -> SiftResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("bulk_upsert begin: {e}")))?;

    for document in documents {
        if let Err(e) = upsert_document(&tx, document) {
            let _ = tx.rollback();
            return Err(e);
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("bulk_upsert commit: {e}")))?;
    Ok(documents.len())
}

/// Fetch a document by url, including its embedding.
pub fn get_document(conn: &Connection, url: &str) -> SiftResult<Option<Document>> {
    let row = conn
        .query_row(
            "SELECT id, url, title, content, source, created_at, embedding
             FROM documents WHERE url = ?1",
            params![url],
            |row| {
                let blob: Option<Vec<u8>> = row.get(6)?;
                Ok((parse_document_row(row), blob))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match row {
        Some((document, blob)) => {
            let mut document = document?;
            if let Some(blob) = blob {
                document.embedding = bytes_to_f32_vec(&blob);
            }
            Ok(Some(document))
        }
        None => Ok(None),
    }
}

/// Delete a document by url. Returns whether a row was removed.
pub fn delete_document(conn: &Connection, url: &str) -> SiftResult<bool> {
    let deleted = conn
        .execute("DELETE FROM documents WHERE url = ?1", params![url])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

/// Fetch documents by row id, preserving the order of `ids`.
pub fn get_by_ids(conn: &Connection, ids: &[i64]) -> SiftResult<Vec<Document>> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::with_capacity(ids.len());
    for id in ids {
        let document = stmt
            .query_row(params![id], |row| Ok(parse_document_row(row)))
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))?;
        if let Some(document) = document {
            results.push(document?);
        }
    }
    Ok(results)
}

/// Parse a row selected with [`DOCUMENT_COLUMNS`].
pub(crate) fn parse_document_row(row: &Row<'_>) -> SiftResult<Document> {
    let url: String = row.get(1).map_err(|e| to_storage_err(e.to_string()))?;
    let created_raw: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    let created_at = parse_timestamp(&created_raw).map_err(|details| StorageError::CorruptRow {
        url: url.clone(),
        details,
    })?;

    Ok(Document {
        url,
        title: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        content: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        source: row.get(4).map_err(|e| to_storage_err(e.to_string()))?,
        embedding: Vec::new(),
        created_at,
    })
}

/// Fixed-width UTC timestamps so lexical order equals time order.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("bad created_at {raw:?}: {e}"))
}

/// Convert f32 slice to bytes (little-endian).
pub(crate) fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to f32 vec.
pub(crate) fn bytes_to_f32_vec(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_bytes_roundtrip() {
        let v = vec![0.5f32, -1.25, 3.0];
        assert_eq!(bytes_to_f32_vec(&f32_vec_to_bytes(&v)), v);
    }

    #[test]
    fn timestamps_sort_lexically() {
        let early = format_timestamp(&"2023-01-05T10:00:00Z".parse().unwrap());
        let late = format_timestamp(&"2024-11-30T08:30:00Z".parse().unwrap());
        assert!(early < late);
        assert!(early.ends_with('Z'));
    }

    #[test]
    fn sqlite_default_timestamp_parses() {
        assert!(parse_timestamp("2024-03-01T12:00:00.123Z").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }
}
