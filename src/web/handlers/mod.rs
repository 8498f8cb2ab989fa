//! Request handlers for the web UI.

pub mod pages;
pub mod pdf;
pub mod stats;
pub mod upload;

pub use pages::*;
pub use pdf::*;
pub use stats::*;
pub use upload::*;

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use super::flash::signing_key;
use super::templates::Templates;
use crate::config::DEFAULT_MAX_UPLOAD_SIZE_MB;
use crate::file::UploadStorage;
use crate::{Database, Result};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Upload directory.
    pub storage: UploadStorage,
    /// Compiled page templates.
    pub templates: Arc<Templates>,
    /// Timezone used to display upload dates.
    pub timezone: String,
    /// Upload ceiling shown on the form, in megabytes.
    pub max_upload_mb: u64,
    /// Flash cookie signing key.
    key: Key,
}

impl AppState {
    /// Create a new application state.
    ///
    /// `secret` seeds the flash cookie key; `None` generates a random one.
    pub fn new(db: Database, storage: UploadStorage, secret: Option<&str>) -> Result<Self> {
        Ok(Self {
            db,
            storage,
            templates: Arc::new(Templates::new()?),
            timezone: "UTC".to_string(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_SIZE_MB,
            key: signing_key(secret),
        })
    }

    /// Set the display timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the upload ceiling shown on the form.
    pub fn with_max_upload_mb(mut self, max_upload_mb: u64) -> Self {
        self.max_upload_mb = max_upload_mb;
        self
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db)
            .field("storage", &self.storage)
            .field("timezone", &self.timezone)
            .field("max_upload_mb", &self.max_upload_mb)
            .finish_non_exhaustive()
    }
}
