//! Data passed to page templates.

pub mod response;

pub use response::*;
