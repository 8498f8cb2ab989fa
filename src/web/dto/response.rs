//! Page view models.

use serde::Serialize;

use crate::datetime::format_datetime_default;
use crate::db::{DatabaseStats, PdfRecord};

// ============================================================================
// Records
// ============================================================================

/// A record prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct PdfView {
    /// Record ID.
    pub id: i64,
    /// Stored (sanitized) name.
    pub filename: String,
    /// Name supplied by the uploader.
    pub original_filename: String,
    /// On-disk location.
    pub file_path: String,
    /// Upload date in the display timezone.
    pub upload_date: String,
}

impl PdfView {
    /// Build a view of a record, formatting its date in `timezone`.
    pub fn from_record(record: PdfRecord, timezone: &str) -> Self {
        let upload_date = format_datetime_default(&record.upload_date, timezone);
        Self {
            id: record.id,
            filename: record.filename,
            original_filename: record.original_filename,
            file_path: record.file_path,
            upload_date,
        }
    }

    /// Build views for a list of records, keeping their order.
    pub fn from_records(records: Vec<PdfRecord>, timezone: &str) -> Vec<Self> {
        records
            .into_iter()
            .map(|r| Self::from_record(r, timezone))
            .collect()
    }
}

// ============================================================================
// Pages
// ============================================================================

/// `GET /`
#[derive(Debug, Serialize)]
pub struct UploadPage {
    /// One-shot message from the previous request.
    pub flash: Option<String>,
    /// Upload ceiling shown next to the file input.
    pub max_upload_mb: u64,
}

/// `GET /view/{id}`
#[derive(Debug, Serialize)]
pub struct ViewPage {
    /// One-shot message from the previous request.
    pub flash: Option<String>,
    /// The record being shown.
    pub pdf: PdfView,
}

/// `GET /list`
#[derive(Debug, Serialize)]
pub struct ListPage {
    /// One-shot message from the previous request.
    pub flash: Option<String>,
    /// Records, newest first.
    pub pdfs: Vec<PdfView>,
}

/// `GET /admin/db`
///
/// Rows are shown with their raw stored dates.
#[derive(Debug, Serialize)]
pub struct AdminPage {
    /// Schema and row count.
    pub stats: DatabaseStats,
    /// Every row, newest first.
    pub pdfs: Vec<PdfRecord>,
}
