//! Cosine-distance nearest-neighbour queries over stored embeddings.

use rusqlite::{params, Connection};

use sift_core::errors::SiftResult;
use sift_core::models::Document;

use super::document_crud::{bytes_to_f32_vec, get_by_ids};
use crate::to_storage_err;

/// The `k` documents nearest to `query_embedding`, as `(document, cosine
/// distance)` pairs ordered by ascending distance. Equal distances keep
/// insertion order.
///
/// Brute-force scan: only rows whose stored dimensionality matches the
/// query are considered.
pub fn nearest(
    conn: &Connection,
    query_embedding: &[f32],
    k: usize,
) -> SiftResult<Vec<(Document, f64)>> {
    if k == 0 || query_embedding.is_empty() {
        return Ok(Vec::new());
    }

    // A zero-norm query has no direction; every distance would be undefined.
    let query_norm_sq: f64 = query_embedding
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum();
    if query_norm_sq == 0.0 {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare_cached(
            "SELECT id, embedding FROM documents
             WHERE dimensions = ?1 AND embedding IS NOT NULL
             ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![query_embedding.len() as i64], |row| {
            let id: i64 = row.get(0)?;
            let blob: Vec<u8> = row.get(1)?;
            Ok((id, blob))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut scored: Vec<(i64, f64)> = Vec::new();
    for row in rows {
        let (id, blob) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let stored = bytes_to_f32_vec(&blob);
        scored.push((id, cosine_distance(query_embedding, &stored)));
    }

    // Stable sort: rows arrive in id order, so ties stay in insertion order.
    scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);

    let ids: Vec<i64> = scored.iter().map(|(id, _)| *id).collect();
    let documents = get_by_ids(conn, &ids)?;

    Ok(documents
        .into_iter()
        .zip(scored.into_iter().map(|(_, d)| d))
        .collect())
}

/// Cosine distance `1 - cos(a, b)`, in `[0, 2]`. Zero-norm stored vectors are
/// treated as orthogonal (distance 1).
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();
    let norm_a: f64 = a
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum::<f64>()
        .sqrt();
    let norm_b: f64 = b
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum::<f64>()
        .sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    (1.0 - dot / (norm_a * norm_b)).clamp(0.0, 2.0)
}
