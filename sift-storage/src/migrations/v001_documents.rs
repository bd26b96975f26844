//! v001: documents table keyed by url, with inline embedding blob.

pub const MIGRATION_SQL: &str = "
    CREATE TABLE IF NOT EXISTS documents (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        url         TEXT NOT NULL UNIQUE,
        title       TEXT NOT NULL,
        content     TEXT NOT NULL,
        source      TEXT NOT NULL DEFAULT 'blog',
        embedding   BLOB,
        dimensions  INTEGER NOT NULL DEFAULT 0,
        created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );

    CREATE INDEX IF NOT EXISTS idx_documents_source ON documents(source);
    CREATE INDEX IF NOT EXISTS idx_documents_dimensions ON documents(dimensions);
";
