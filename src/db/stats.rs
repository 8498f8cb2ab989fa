//! Table introspection and storage statistics.

use serde::Serialize;

use super::repository::PdfRepository;
use super::schema::PDFS_TABLE;
use super::Database;
use crate::Result;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One column of the `pdfs` table as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Declared SQL type.
    #[serde(rename = "type")]
    pub column_type: String,
    /// Whether the column is `NOT NULL`.
    pub required: bool,
    /// Default value expression, if any.
    pub default: Option<String>,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
}

/// Informational statistics about the record table and its backing store.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStats {
    /// Table name (always `pdfs`).
    pub table_name: String,
    /// Column definitions in declaration order.
    pub columns: Vec<ColumnInfo>,
    /// Number of rows in the table.
    pub total_records: i64,
    /// Size of the backing store in bytes.
    pub database_size_bytes: u64,
    /// Size of the backing store in MiB, rounded to two decimals.
    pub database_size_mb: f64,
}

impl DatabaseStats {
    /// Collect statistics. Read-only.
    pub async fn collect(db: &Database) -> Result<Self> {
        let rows: Vec<(i64, String, String, i64, Option<String>, i64)> =
            sqlx::query_as(&format!("PRAGMA table_info({PDFS_TABLE})"))
                .fetch_all(db.pool())
                .await?;

        let columns = rows
            .into_iter()
            .map(|(_cid, name, column_type, notnull, default, pk)| ColumnInfo {
                name,
                column_type,
                required: notnull != 0,
                default,
                primary_key: pk != 0,
            })
            .collect();

        let total_records = PdfRepository::new(db.pool()).count().await?;
        let database_size_bytes = db.size_bytes().await?;

        Ok(Self {
            table_name: PDFS_TABLE.to_string(),
            columns,
            total_records,
            database_size_bytes,
            database_size_mb: bytes_to_mb(database_size_bytes),
        })
    }
}

fn bytes_to_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
