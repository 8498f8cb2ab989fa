//! Configuration module for pdfstash.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, StashError};

/// Environment variable holding the flash-message signing secret.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Environment variable overriding the database path.
pub const DATABASE_PATH_ENV: &str = "PDFSTASH_DATABASE_PATH";

/// Default maximum upload size in megabytes.
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: u64 = 16;

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Timezone for displaying upload dates (e.g., "Europe/Berlin", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timezone: default_timezone(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "pdfs.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Upload configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    /// Directory where accepted PDFs are written.
    #[serde(default = "default_upload_dir")]
    pub dir: String,
    /// Maximum request body size in megabytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u64,
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_max_upload_size() -> u64 {
    DEFAULT_MAX_UPLOAD_SIZE_MB
}

impl UploadsConfig {
    /// Maximum request body size in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        (self.max_upload_size_mb * 1024 * 1024) as usize
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_upload_size_mb: default_max_upload_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty means console only.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Web UI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebConfig {
    /// Secret used to sign flash-message cookies.
    ///
    /// When empty a random key is generated at startup.
    #[serde(default)]
    pub secret_key: String,
}

impl WebConfig {
    /// The configured secret, if any.
    pub fn secret(&self) -> Option<&str> {
        if self.secret_key.is_empty() {
            None
        } else {
            Some(&self.secret_key)
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Upload configuration.
    #[serde(default)]
    pub uploads: UploadsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web UI configuration.
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(StashError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| StashError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SECRET_KEY`: flash-message signing secret
    /// - `PDFSTASH_DATABASE_PATH`: SQLite database file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var(SECRET_KEY_ENV) {
            if !secret.is_empty() {
                self.web.secret_key = secret;
            }
        }
        if let Ok(path) = std::env::var(DATABASE_PATH_ENV) {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.uploads.max_upload_size_mb == 0 {
            return Err(StashError::Config(
                "uploads.max_upload_size_mb must be greater than zero".to_string(),
            ));
        }
        if self.uploads.dir.trim().is_empty() {
            return Err(StashError::Config("uploads.dir must not be empty".to_string()));
        }
        if self.server.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(StashError::Config(format!(
                "unknown timezone: {}",
                self.server.timezone
            )));
        }
        Ok(())
    }
}
