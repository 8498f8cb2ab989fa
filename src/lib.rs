//! pdfstash - PDF upload host
//!
//! A small web application that accepts PDF uploads, records their metadata
//! in SQLite and serves the files back by id.

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::{Database, NewPdf, PdfRecord, PdfRepository};
pub use error::{Result, StashError};
pub use file::{is_acceptable, sanitize, UploadStorage};
