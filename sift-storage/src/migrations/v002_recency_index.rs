//! v002: created_at index for recency listings and date-range stats.

pub const MIGRATION_SQL: &str = "
    CREATE INDEX IF NOT EXISTS idx_documents_created_at ON documents(created_at);
";
