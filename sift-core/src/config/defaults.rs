// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "sift.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashed";
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-minilm";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;

// --- Retrieval ---
pub const DEFAULT_SEMANTIC_TOP_K: usize = 10;
pub const DEFAULT_KEYWORD_TOP_K: usize = 15;
pub const DEFAULT_MAX_KEYWORDS: usize = 3;
pub const DEFAULT_RESULT_LIMIT: usize = 6;
pub const DEFAULT_DEADLINE_MS: u64 = 10_000;
pub const DEFAULT_ALLOW_DEGRADED: bool = false;

// --- Generation ---
pub const DEFAULT_CONTEXT_SEPARATOR: &str = "\n\n---\n\n";
