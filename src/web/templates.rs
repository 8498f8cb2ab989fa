//! HTML page templates.
//!
//! Every page is a handlebars template compiled into the binary. Values are
//! HTML-escaped on output.

use handlebars::Handlebars;
use serde::Serialize;

use crate::{Result, StashError};

/// Upload form page.
pub const UPLOAD: &str = "upload";
/// Single record detail page.
pub const VIEW_PDF: &str = "view_pdf";
/// Record listing page.
pub const LIST_PDFS: &str = "list_pdfs";
/// Diagnostic table dump.
pub const ADMIN_DB: &str = "admin_db";

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/header.hbs")),
    ("footer", include_str!("../../templates/footer.hbs")),
    ("flash", include_str!("../../templates/flash.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    (UPLOAD, include_str!("../../templates/upload.hbs")),
    (VIEW_PDF, include_str!("../../templates/view_pdf.hbs")),
    (LIST_PDFS, include_str!("../../templates/list_pdfs.hbs")),
    (ADMIN_DB, include_str!("../../templates/admin_db.hbs")),
];

/// Registry of page templates.
pub struct Templates {
    engine: Handlebars<'static>,
}

impl Templates {
    /// Compile all built-in templates.
    pub fn new() -> Result<Self> {
        let mut engine = Handlebars::new();

        for (name, source) in PARTIALS {
            engine.register_partial(name, *source).map_err(|e| {
                StashError::Template(format!("Failed to register partial {name}: {e}"))
            })?;
        }

        for (name, source) in PAGES {
            engine.register_template_string(name, *source).map_err(|e| {
                StashError::Template(format!("Failed to register template {name}: {e}"))
            })?;
        }

        Ok(Self { engine })
    }

    /// Render a page with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.engine.render(name, data)?)
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("pages", &PAGES.iter().map(|(name, _)| *name).collect::<Vec<_>>())
            .finish()
    }
}
