//! Web UI module for pdfstash.
//!
//! Serves the upload form, record pages, the raw PDF files and a JSON
//! statistics endpoint.

pub mod dto;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
