//! Error types for pdfstash.

use thiserror::Error;

/// Common error type for pdfstash.
#[derive(Error, Debug)]
pub enum StashError {
    /// Database error.
    ///
    /// Wraps any failure to create the table, insert or query. Errors from
    /// sqlx are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Template registration or rendering error.
    #[error("template error: {0}")]
    Template(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StashError {
    fn from(e: sqlx::Error) -> Self {
        StashError::Database(e.to_string())
    }
}

impl From<handlebars::RenderError> for StashError {
    fn from(e: handlebars::RenderError) -> Self {
        StashError::Template(e.to_string())
    }
}

/// Result type alias for pdfstash operations.
pub type Result<T> = std::result::Result<T, StashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = StashError::Database("disk I/O error".to_string());
        assert_eq!(err.to_string(), "database error: disk I/O error");
    }

    #[test]
    fn test_template_error_display() {
        let err = StashError::Template("missing partial".to_string());
        assert_eq!(err.to_string(), "template error: missing partial");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StashError = io_err.into();
        assert!(matches!(err, StashError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: StashError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StashError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i64> {
            Ok(7)
        }

        fn sample_err() -> Result<i64> {
            Err(StashError::Config("bad".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 7);
        assert!(sample_err().is_err());
    }
}
