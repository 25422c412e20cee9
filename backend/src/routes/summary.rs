//! Daily summary API route

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::SummaryService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use calsnap_shared::types::{DailySummaryResponse, DateQuery};
use chrono::Utc;

/// Create summary routes
pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}

/// GET /api/v1/summary?date=YYYY-MM-DD - The day's calorie summary
///
/// Defaults to the current UTC day when no date is given.
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> Result<Json<DailySummaryResponse>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let summary = SummaryService::daily_summary(state.db(), auth.user_id, date).await?;
    Ok(Json(summary))
}
