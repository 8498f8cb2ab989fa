//! Raw PDF download.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use super::AppState;
use crate::db::PdfRepository;
use crate::web::error::ApiError;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// GET /pdf/:id - Stream the stored file.
///
/// Unknown ids and records whose file has gone missing get a plain-text
/// 404. `HEAD` and `Range` requests are handled by `ServeFile`.
pub async fn serve_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Response, ApiError> {
    let Some(file_path) = PdfRepository::new(state.db.pool()).get_file_path(id).await? else {
        return Ok(pdf_not_found());
    };

    if !tokio::fs::try_exists(&file_path).await.unwrap_or(false) {
        tracing::warn!(pdf_id = id, path = %file_path, "Stored file is missing");
        return Ok(pdf_not_found());
    }

    let mut response = match ServeFile::new(&file_path).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(pdf_not_found());
    }

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(PDF_CONTENT_TYPE),
    );
    Ok(response)
}

fn pdf_not_found() -> Response {
    (StatusCode::NOT_FOUND, "PDF not found").into_response()
}
