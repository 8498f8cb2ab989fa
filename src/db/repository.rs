//! PDF record repository.
//!
//! Create/read/list operations on the `pdfs` table. No update or delete
//! operations exist.

use sqlx::SqlitePool;
use tracing::info;

use super::pdf::{NewPdf, PdfRecord};
use crate::Result;

/// Repository for PDF records.
pub struct PdfRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PdfRepository<'a> {
    /// Create a new PdfRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return its assigned ID.
    ///
    /// The upload date is set by the database.
    pub async fn create(&self, new_pdf: &NewPdf) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO pdfs (filename, original_filename, file_path) VALUES (?, ?, ?)",
        )
        .bind(&new_pdf.filename)
        .bind(&new_pdf.original_filename)
        .bind(&new_pdf.file_path)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(pdf_id = id, filename = %new_pdf.filename, "PDF record created");
        Ok(id)
    }

    /// Get a record by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<PdfRecord>> {
        let record = sqlx::query_as::<_, PdfRecord>(
            "SELECT id, filename, original_filename, file_path, upload_date
             FROM pdfs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// Get only the stored file path for a record.
    pub async fn get_file_path(&self, id: i64) -> Result<Option<String>> {
        let path = sqlx::query_scalar::<_, String>("SELECT file_path FROM pdfs WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(path)
    }

    /// List all records, newest first.
    ///
    /// Uploads within the same second are ordered by descending ID.
    pub async fn list_all(&self) -> Result<Vec<PdfRecord>> {
        let records = sqlx::query_as::<_, PdfRecord>(
            "SELECT id, filename, original_filename, file_path, upload_date
             FROM pdfs ORDER BY upload_date DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Count all records.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pdfs")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_positive_id() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        let id = repo
            .create(&NewPdf::new("test.pdf", "original_test.pdf", "/path/to/test.pdf"))
            .await
            .unwrap();

        assert!(id > 0);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        let first = repo.create(&NewPdf::new("a.pdf", "a.pdf", "/a.pdf")).await.unwrap();
        let second = repo.create(&NewPdf::new("b.pdf", "b.pdf", "/b.pdf")).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        let id = repo
            .create(&NewPdf::new("test.pdf", "original_test.pdf", "/path/to/test.pdf"))
            .await
            .unwrap();

        let record = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.filename, "test.pdf");
        assert_eq!(record.original_filename, "original_test.pdf");
        assert_eq!(record.file_path, "/path/to/test.pdf");
        assert!(crate::datetime::parse_utc(&record.upload_date).is_some());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_file_path() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        let id = repo
            .create(&NewPdf::new("test.pdf", "original_test.pdf", "/path/to/test.pdf"))
            .await
            .unwrap();

        assert_eq!(
            repo.get_file_path(id).await.unwrap(),
            Some("/path/to/test.pdf".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_file_path_not_found() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        assert!(repo.get_file_path(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        // Explicit timestamps so ordering does not depend on the clock.
        for (name, date) in [
            ("middle.pdf", "2024-02-01 12:00:00"),
            ("oldest.pdf", "2024-01-01 12:00:00"),
            ("newest.pdf", "2024-03-01 12:00:00"),
        ] {
            sqlx::query(
                "INSERT INTO pdfs (filename, original_filename, file_path, upload_date)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(name)
            .bind(name)
            .bind(format!("uploads/{name}"))
            .bind(date)
            .execute(db.pool())
            .await
            .unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.filename)
            .collect();

        assert_eq!(names, vec!["newest.pdf", "middle.pdf", "oldest.pdf"]);
    }

    #[tokio::test]
    async fn test_list_all_same_second_by_id() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        let mut ids = Vec::new();
        for i in 0..5 {
            let id = repo
                .create(&NewPdf::new(
                    format!("test_{i}.pdf"),
                    format!("original_test_{i}.pdf"),
                    format!("/uploads/test_{i}.pdf"),
                ))
                .await
                .unwrap();
            ids.push(id);
        }

        let records = repo.list_all().await.unwrap();
        assert_eq!(records.len(), 5);

        for pair in records.windows(2) {
            assert!(pair[0].upload_date >= pair[1].upload_date);
        }

        // Same-second rows fall back to id order; with distinct seconds the
        // newest row is still the last insert.
        assert_eq!(records[0].id, *ids.last().unwrap());
    }

    #[tokio::test]
    async fn test_count() {
        let db = setup_db().await;
        let repo = PdfRepository::new(db.pool());

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(&NewPdf::new("a.pdf", "a.pdf", "/a.pdf")).await.unwrap();
        repo.create(&NewPdf::new("a.pdf", "a.pdf", "/a.pdf")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
