//! PDF record model.

use serde::Serialize;

/// Metadata for one uploaded PDF.
///
/// Records are append-only: created once per accepted upload and never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct PdfRecord {
    /// Unique record ID, assigned by the database.
    pub id: i64,
    /// Sanitized name the file is stored under.
    pub filename: String,
    /// Name supplied by the client (untrusted, display only).
    pub original_filename: String,
    /// On-disk location of the bytes.
    pub file_path: String,
    /// When the record was inserted (UTC, SQLite text format).
    pub upload_date: String,
}


/// Data for creating a new record.
#[derive(Debug, Clone)]
pub struct NewPdf {
    /// Sanitized name the file is stored under.
    pub filename: String,
    /// Name supplied by the client.
    pub original_filename: String,
    /// On-disk location of the bytes.
    pub file_path: String,
}

impl NewPdf {
    /// Create a new NewPdf.
    pub fn new(
        filename: impl Into<String>,
        original_filename: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            original_filename: original_filename.into(),
            file_path: file_path.into(),
        }
    }
}
