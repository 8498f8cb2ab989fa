//! HTML page handlers.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use super::AppState;
use crate::db::PdfRepository;
use crate::web::dto::{AdminPage, ListPage, PdfView, UploadPage, ViewPage};
use crate::web::error::ApiError;
use crate::web::flash::{set_flash, take_flash, MSG_NOT_FOUND};
use crate::web::templates::{ADMIN_DB, LIST_PDFS, UPLOAD, VIEW_PDF};

/// GET / - Upload form.
pub async fn upload_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), ApiError> {
    let (jar, flash) = take_flash(jar);
    let page = UploadPage {
        flash,
        max_upload_mb: state.max_upload_mb,
    };

    let html = state.templates.render(UPLOAD, &page)?;
    Ok((jar, Html(html)))
}

/// GET /view/:id - Record detail page.
///
/// An unknown id redirects to the upload form with a message.
pub async fn view_pdf(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let repo = PdfRepository::new(state.db.pool());

    let Some(record) = repo.get_by_id(id).await? else {
        tracing::debug!(pdf_id = id, "Detail requested for unknown PDF");
        let jar = set_flash(jar, MSG_NOT_FOUND);
        return Ok((jar, Redirect::to("/")).into_response());
    };

    let (jar, flash) = take_flash(jar);
    let page = ViewPage {
        flash,
        pdf: PdfView::from_record(record, &state.timezone),
    };

    let html = state.templates.render(VIEW_PDF, &page)?;
    Ok((jar, Html(html)).into_response())
}

/// GET /list - All records, newest first.
pub async fn list_pdfs(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), ApiError> {
    let records = PdfRepository::new(state.db.pool()).list_all().await?;

    let (jar, flash) = take_flash(jar);
    let page = ListPage {
        flash,
        pdfs: PdfView::from_records(records, &state.timezone),
    };

    let html = state.templates.render(LIST_PDFS, &page)?;
    Ok((jar, Html(html)))
}

/// GET /admin/db - Schema, statistics and every row.
///
/// Diagnostic page with no access control.
pub async fn admin_db(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let stats = state.db.stats().await?;
    let pdfs = PdfRepository::new(state.db.pool()).list_all().await?;

    let page = AdminPage { stats, pdfs };

    let html = state.templates.render(ADMIN_DB, &page)?;
    Ok(Html(html))
}
