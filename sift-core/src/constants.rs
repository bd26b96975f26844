/// Similarity assigned to every keyword-sourced candidate.
pub const KEYWORD_SIMILARITY: f64 = 1.0;

/// Maximum number of documents in a single bulk upsert.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;

/// Number of topics reported by corpus statistics.
pub const TOP_TOPICS_REPORTED: usize = 5;

/// Environment variable read by the tracing setup.
pub const LOG_ENV_VAR: &str = "SIFT_LOG";
