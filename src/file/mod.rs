//! Upload handling for pdfstash.
//!
//! This module decides whether an uploaded file is acceptable, derives a
//! safe on-disk name and writes the bytes to the upload directory.

mod storage;
mod validation;

pub use storage::{RawUpload, SavedFile, UploadStorage};
pub use validation::{is_acceptable, sanitize};

/// The only accepted extension (compared case-insensitively).
pub const ALLOWED_EXTENSION: &str = "pdf";

/// Maximum length of the sanitized stem (in characters).
pub const MAX_STEM_LENGTH: usize = 100;

/// Stem used when nothing portable is left of the client's filename.
pub const FALLBACK_STEM: &str = "upload";
