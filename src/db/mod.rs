//! Database module for pdfstash.
//!
//! This module provides SQLite connectivity (via sqlx), the `pdfs` schema,
//! the PDF record repository and table statistics.

mod pdf;
mod repository;
mod schema;
mod stats;

pub use pdf::{NewPdf, PdfRecord};
pub use repository::PdfRepository;
pub use schema::{PDFS_TABLE, SCHEMA};
pub use stats::{ColumnInfo, DatabaseStats};

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::Result;

/// Maximum number of pooled connections for a file-backed database.
const MAX_CONNECTIONS: u32 = 5;

/// Database handle wrapping a SQLite connection pool.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    /// Backing file, `None` for in-memory databases.
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database at the specified path.
    ///
    /// The file and its parent directories are created if they don't exist,
    /// and the schema is initialized.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening database at {:?}", path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            path: Some(path.to_path_buf()),
        };
        db.initialize().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    ///
    /// Every SQLite in-memory connection is a separate database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn open_in_memory() -> Result<Self> {
        debug!("Opening in-memory database");
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool, path: None };
        db.initialize().await?;

        Ok(db)
    }

    /// Ensure the `pdfs` table exists.
    ///
    /// Safe to call on every start; has no effect when the table exists.
    pub async fn initialize(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Database schema ready");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }


    /// Size of the database in bytes.
    ///
    /// For a file-backed database this is the on-disk size of the main file
    /// plus its write-ahead log. In-memory databases report their page usage.
    pub async fn size_bytes(&self) -> Result<u64> {
        match &self.path {
            Some(path) => {
                let mut wal = path.clone().into_os_string();
                wal.push("-wal");
                Ok(file_len(path)? + file_len(Path::new(&wal))?)
            }
            None => {
                let page_count: i64 = sqlx::query_scalar("PRAGMA page_count")
                    .fetch_one(&self.pool)
                    .await?;
                let page_size: i64 = sqlx::query_scalar("PRAGMA page_size")
                    .fetch_one(&self.pool)
                    .await?;
                Ok((page_count * page_size).max(0) as u64)
            }
        }
    }

    /// Collect schema and size statistics for the `pdfs` table.
    pub async fn stats(&self) -> Result<DatabaseStats> {
        DatabaseStats::collect(self).await
    }
}

/// Length of a file, treating a missing file as empty.
fn file_len(path: &Path) -> Result<u64> {
    match std::fs::metadata(path) {
        Ok(m) => Ok(m.len()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn table_exists(db: &Database, table_name: &str) -> bool {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?)",
        )
        .bind(table_name)
        .fetch_one(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.path().is_none());
        assert!(table_exists(&db, "pdfs").await);
    }

    #[tokio::test]
    async fn test_table_exists_unknown() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(!table_exists(&db, "users").await);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = PdfRepository::new(db.pool());
        repo.create(&NewPdf::new("a.pdf", "a.pdf", "uploads/a.pdf"))
            .await
            .unwrap();

        db.initialize().await.unwrap();
        db.initialize().await.unwrap();

        assert!(table_exists(&db, "pdfs").await);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_file_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("pdfs.db");

        {
            let db = Database::open(&db_path).await.unwrap();
            assert_eq!(db.path(), Some(db_path.as_path()));
            PdfRepository::new(db.pool())
                .create(&NewPdf::new("kept.pdf", "kept.pdf", "uploads/kept.pdf"))
                .await
                .unwrap();
            db.pool().close().await;
        }

        assert!(db_path.exists());

        // Reopening keeps existing rows.
        let db = Database::open(&db_path).await.unwrap();
        let repo = PdfRepository::new(db.pool());
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(db.size_bytes().await.unwrap() > 0);
    }

    #[tokio::test]
    async fn test_size_bytes_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.size_bytes().await.unwrap() > 0);
    }

    #[test]
    fn test_file_len_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(file_len(&temp_dir.path().join("absent")).unwrap(), 0);
    }
}
