//! Database schema for pdfstash.
//!
//! Statements use `IF NOT EXISTS` so they can be replayed on every start.

/// Name of the table holding one row per uploaded PDF.
pub const PDFS_TABLE: &str = "pdfs";

/// Schema statements, applied in order by [`super::Database::initialize`].
pub const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS pdfs (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    filename            TEXT NOT NULL,       -- sanitized on-disk name
    original_filename   TEXT NOT NULL,       -- client-supplied, display only
    file_path           TEXT NOT NULL,
    upload_date         TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_pdfs_upload_date ON pdfs(upload_date)
"#,
];
