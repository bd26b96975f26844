//! Test fixture loader for the Sift knowledge-base corpus and retrieval scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper functions
//! for loading them in tests and benches across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use sift_core::Document;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
pub fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("corpus").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A corpus fixture: a named set of documents without embeddings.
#[derive(Debug, Deserialize)]
pub struct CorpusFixture {
    pub name: String,
    pub documents: Vec<Document>,
}

/// The SQL Server knowledge-base corpus used by storage and retrieval tests.
pub const SQL_SERVER_KB: &str = "corpus/sql_server_kb.json";

/// Load the SQL Server knowledge-base documents.
pub fn load_corpus() -> Vec<Document> {
    load_fixture::<CorpusFixture>(SQL_SERVER_KB).documents
}
