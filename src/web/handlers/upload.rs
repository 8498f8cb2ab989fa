//! Upload handler.

use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use axum_extra::extract::cookie::SignedCookieJar;

use super::AppState;
use crate::db::{NewPdf, PdfRepository};
use crate::file::RawUpload;
use crate::web::error::ApiError;
use crate::web::flash::{set_flash, MSG_INVALID_FILE, MSG_NO_FILE, MSG_UPLOADED};

/// Name of the multipart part carrying the file.
const FILE_FIELD: &str = "file";

/// POST /upload - Accept a PDF.
///
/// Request body: multipart/form-data with a "file" part.
///
/// Expected failures (no file part, empty name, wrong extension) redirect
/// back to the form with a flash message. The file is written before the
/// record is inserted; if the insert fails the file stays on disk.
pub async fn upload_pdf(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut multipart: Multipart,
) -> Result<(SignedCookieJar, Redirect), ApiError> {
    let mut upload: Option<RawUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        if field.name() != Some(FILE_FIELD) || upload.is_some() {
            continue;
        }

        // A part without a filename attribute is a plain form value, not a file.
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let content = field.bytes().await.map_err(ApiError::from_multipart)?;
        upload = Some(RawUpload::new(filename, content));
    }

    let Some(upload) = upload else {
        tracing::debug!("Upload without a file part");
        return Ok((set_flash(jar, MSG_NO_FILE), Redirect::to("/")));
    };

    let Some(saved) = state.storage.save_uploaded_file(Some(&upload)).await? else {
        tracing::info!(original = %upload.filename, "Rejected upload");
        return Ok((set_flash(jar, MSG_INVALID_FILE), Redirect::to("/")));
    };

    let new_pdf = NewPdf::new(
        saved.filename,
        upload.filename,
        saved.path.to_string_lossy(),
    );
    let id = PdfRepository::new(state.db.pool()).create(&new_pdf).await?;

    Ok((
        set_flash(jar, MSG_UPLOADED),
        Redirect::to(&format!("/view/{id}")),
    ))
}
