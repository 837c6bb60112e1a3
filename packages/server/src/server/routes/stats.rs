use axum::{extract::Extension, Json};

use crate::domains::listings::StatsData;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/stats` - aggregate platform counts
pub async fn stats_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<StatsData>, ApiError> {
    let stats = state.listings.stats().await?;
    Ok(Json(stats.into()))
}
