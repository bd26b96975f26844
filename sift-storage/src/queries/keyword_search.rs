//! Case-insensitive substring matching over title and content.
//!
//! The predicate is assembled from placeholders only; keyword values are
//! always bound. `instr` is used instead of `LIKE` so `%` and `_` in user
//! input match literally, and `sift_lower` instead of `lower` so non-ASCII
//! text folds case.

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use sift_core::errors::SiftResult;
use sift_core::models::Document;

use super::document_crud::{parse_document_row, DOCUMENT_COLUMNS};
use crate::to_storage_err;

/// Up to `k` documents whose title or content contains any keyword,
/// in insertion order.
pub fn match_any(conn: &Connection, keywords: &[String], k: usize) -> SiftResult<Vec<Document>> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect();
    if keywords.is_empty() || k == 0 {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE {} ORDER BY id LIMIT ?{}",
        any_keyword_predicate(keywords.len()),
        keywords.len() + 1
    );

    let mut bound: Vec<Value> = keywords.into_iter().map(Value::Text).collect();
    bound.push(Value::Integer(i64::try_from(k).unwrap_or(i64::MAX)));

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(bound.iter()), |row| {
            Ok(parse_document_row(row))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let document = row.map_err(|e| to_storage_err(e.to_string()))??;
        results.push(document);
    }
    Ok(results)
}

/// `(instr(sift_lower(title), ?1) > 0 OR instr(sift_lower(content), ?1) > 0) OR ...`
/// for placeholders `?1..?count`.
pub(crate) fn any_keyword_predicate(count: usize) -> String {
    (1..=count)
        .map(|i| format!("(instr(sift_lower(title), ?{i}) > 0 OR instr(sift_lower(content), ?{i}) > 0)"))
        .collect::<Vec<_>>()
        .join(" OR ")
}
