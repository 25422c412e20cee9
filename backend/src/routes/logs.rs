//! Food and workout log API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::LogService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use calsnap_shared::types::{
    AnalyzeMealRequest, AnalyzeMealResponse, DateQuery, FoodLogResponse, LogFoodRequest,
    LogWorkoutRequest, WorkoutLogResponse,
};
use chrono::Utc;

/// Create log routes
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/food", post(log_food).get(list_food))
        .route("/food/analyze", post(analyze_meal))
        .route("/workouts", post(log_workout).get(list_workouts))
}

/// POST /api/v1/logs/food - Append a manually entered food log
async fn log_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogFoodRequest>,
) -> Result<Json<FoodLogResponse>, ApiError> {
    let log = LogService::log_food(state.db(), auth.user_id, req).await?;
    Ok(Json(log.into()))
}

/// GET /api/v1/logs/food?date=YYYY-MM-DD - The day's food entries, newest first
async fn list_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<FoodLogResponse>>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let logs = LogService::food_for_day(state.db(), auth.user_id, date).await?;
    Ok(Json(logs.into_iter().map(FoodLogResponse::from).collect()))
}

/// POST /api/v1/logs/food/analyze - Analyze a meal photo and log the result
async fn analyze_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AnalyzeMealRequest>,
) -> Result<Json<AnalyzeMealResponse>, ApiError> {
    let response = LogService::analyze_and_log(&state, auth.user_id, req).await?;
    Ok(Json(response))
}

/// POST /api/v1/logs/workouts - Append a workout log
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<Json<WorkoutLogResponse>, ApiError> {
    let log = LogService::log_workout(state.db(), auth.user_id, req).await?;
    Ok(Json(log.into()))
}

/// GET /api/v1/logs/workouts?date=YYYY-MM-DD - The day's workouts, newest first
async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<WorkoutLogResponse>>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let logs = LogService::workouts_for_day(state.db(), auth.user_id, date).await?;
    Ok(Json(
        logs.into_iter().map(WorkoutLogResponse::from).collect(),
    ))
}
