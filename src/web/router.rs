//! Router configuration for the web UI.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use super::handlers::{
    admin_db, api_stats, list_pdfs, serve_pdf, upload_form, upload_pdf, view_pdf, AppState,
};
use super::middleware::security_headers;

/// Create the main router.
///
/// Request bodies larger than `max_upload_bytes` are rejected with 413
/// before any handler runs.
pub fn create_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    let page_routes = Router::new()
        .route("/", get(upload_form))
        .route("/view/:id", get(view_pdf))
        .route("/list", get(list_pdfs))
        .route("/admin/db", get(admin_db));

    let file_routes = Router::new()
        .route("/upload", post(upload_pdf))
        .route("/pdf/:id", get(serve_pdf));

    let api_routes = Router::new().route("/stats", get(api_stats));

    Router::new()
        .merge(page_routes)
        .merge(file_routes)
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .with_state(app_state)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers)),
        )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
