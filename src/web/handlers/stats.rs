//! JSON statistics endpoint.

use axum::{extract::State, Json};

use super::AppState;
use crate::db::DatabaseStats;
use crate::web::error::ApiError;

/// GET /api/stats - Table schema, row count and database size.
pub async fn api_stats(State(state): State<AppState>) -> Result<Json<DatabaseStats>, ApiError> {
    let stats = state.db.stats().await?;
    Ok(Json(stats))
}
