//! Scalar functions registered on every connection.
//!
//! SQLite's built-in `lower()` only folds ASCII, so case-insensitive
//! matching goes through `sift_lower`, which applies full Unicode lowercasing
//! to match how keywords are lowercased before binding.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use sift_core::errors::SiftResult;

use crate::to_storage_err;

/// Name of the Unicode-aware lowercase function.
pub const LOWER_FN: &str = "sift_lower";

/// Register `sift_lower(text)` on `conn`. NULL stays NULL.
pub fn register_functions(conn: &Connection) -> SiftResult<()> {
    conn.create_scalar_function(
        LOWER_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
    .map_err(|e| to_storage_err(format!("register {LOWER_FN}: {e}")))
}
