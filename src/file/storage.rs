//! Upload directory storage.
//!
//! Accepted files are written flat into a single directory under their
//! sanitized name:
//! ```text
//! {upload_dir}/
//! ├── report.pdf
//! └── My_Annual_Report.pdf
//! ```
//! A second upload with the same sanitized name silently replaces the first
//! file; there is no collision detection.

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use tracing::{debug, info};

use super::validation::{is_acceptable, sanitize};
use crate::Result;

/// A file as received from the client, before validation.
#[derive(Debug, Clone)]
pub struct RawUpload {
    /// Filename supplied by the client (may be empty).
    pub filename: String,
    /// File content.
    pub content: Bytes,
}

impl RawUpload {
    /// Create a new RawUpload.
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// An accepted upload that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Sanitized name the file is stored under.
    pub filename: String,
    /// Location of the written file.
    pub path: PathBuf,
}

/// Storage for uploaded PDFs in a configured directory.
#[derive(Debug, Clone)]
pub struct UploadStorage {
    /// Directory accepted files are written to.
    upload_dir: PathBuf,
}

impl UploadStorage {
    /// Create a new UploadStorage for the given directory.
    ///
    /// Does not touch the filesystem; see [`UploadStorage::ensure_directory`].
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Get the upload directory.
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the upload directory if it doesn't exist.
    ///
    /// Idempotent; called once during process start.
    pub fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.upload_dir)?;
        info!("Upload folder {:?} ready", self.upload_dir);
        Ok(())
    }

    /// Get the path a sanitized name is stored at.
    pub fn path_for(&self, sanitized_name: &str) -> PathBuf {
        self.upload_dir.join(sanitized_name)
    }

    /// Write content under the given sanitized name.
    ///
    /// Creates the upload directory if absent and overwrites any existing
    /// file of the same name.
    pub async fn store(&self, content: &[u8], sanitized_name: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;

        let path = self.path_for(sanitized_name);
        tokio::fs::write(&path, content).await?;

        info!("File saved: {}", path.display());
        Ok(path)
    }

    /// Validate, sanitize and store an upload.
    ///
    /// Returns `Ok(None)` when no file was supplied, the filename is empty or
    /// the extension is not `pdf`. I/O failures are returned as errors.
    pub async fn save_uploaded_file(&self, upload: Option<&RawUpload>) -> Result<Option<SavedFile>> {
        let Some(upload) = upload else {
            debug!("No file supplied");
            return Ok(None);
        };

        if upload.filename.is_empty() || !is_acceptable(&upload.filename) {
            debug!("Rejected upload {:?}", upload.filename);
            return Ok(None);
        }

        let filename = sanitize(&upload.filename);
        let path = self.store(&upload.content, &filename).await?;

        Ok(Some(SavedFile { filename, path }))
    }
}
