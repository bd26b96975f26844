//! Counts, date ranges and recency listings.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use sift_core::errors::{SiftResult, StorageError};
use sift_core::models::DocumentSummary;

use super::document_crud::parse_timestamp;
use crate::to_storage_err;

pub fn count(conn: &Connection) -> SiftResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

/// Documents whose title or content mentions `topic`. An empty topic counts
/// everything.
pub fn count_matching(conn: &Connection, topic: &str) -> SiftResult<usize> {
    let topic = topic.trim().to_lowercase();
    if topic.is_empty() {
        return count(conn);
    }
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM documents
             WHERE instr(sift_lower(title), ?1) > 0 OR instr(sift_lower(content), ?1) > 0",
            params![topic],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

pub fn count_title_containing(conn: &Connection, topic: &str) -> SiftResult<usize> {
    let topic = topic.trim().to_lowercase();
    if topic.is_empty() {
        return Ok(0);
    }
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM documents WHERE instr(sift_lower(title), ?1) > 0",
            params![topic],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

/// `(source, count)` ordered by source.
pub fn count_by_source(conn: &Connection) -> SiftResult<Vec<(String, usize)>> {
    let mut stmt = conn
        .prepare("SELECT source, COUNT(*) FROM documents GROUP BY source ORDER BY source")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let source: String = row.get(0)?;
            let n: i64 = row.get(1)?;
            Ok((source, n as usize))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(results)
}

/// Earliest and latest `created_at`, or `None` for an empty corpus.
pub fn created_range(conn: &Connection) -> SiftResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    let (min, max): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT MIN(created_at), MAX(created_at) FROM documents",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    match (min, max) {
        (Some(min), Some(max)) => {
            let corrupt = |details: String| StorageError::CorruptRow {
                url: "<aggregate>".to_string(),
                details,
            };
            let earliest = parse_timestamp(&min).map_err(corrupt)?;
            let latest = parse_timestamp(&max).map_err(corrupt)?;
            Ok(Some((earliest, latest)))
        }
        _ => Ok(None),
    }
}

/// Newest documents first.
pub fn list_recent(conn: &Connection, limit: usize) -> SiftResult<Vec<DocumentSummary>> {
    let mut stmt = conn
        .prepare(
            "SELECT title, url, source, created_at FROM documents
             ORDER BY created_at DESC, id DESC
             LIMIT ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![i64::try_from(limit).unwrap_or(i64::MAX)], |row| {
            let title: String = row.get(0)?;
            let url: String = row.get(1)?;
            let source: String = row.get(2)?;
            let created: String = row.get(3)?;
            Ok((title, url, source, created))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (title, url, source, created) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let created_at = parse_timestamp(&created).map_err(|details| StorageError::CorruptRow {
            url: url.clone(),
            details,
        })?;
        results.push(DocumentSummary {
            title,
            url,
            source,
            created_at,
        });
    }
    Ok(results)
}
