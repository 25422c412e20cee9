//! User profile API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use calsnap_shared::types::{UpdateProfileRequest, UserProfileResponse};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Get the caller's profile
///
/// Creates a skeleton profile on first authenticated access, so this
/// endpoint never 404s for a valid token.
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = ProfileService::get_or_create(state.db(), &state.profile_events, &auth).await?;
    Ok(Json(ProfileService::to_response(profile)))
}

/// PUT /api/v1/profile - Merge a partial profile update
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    // Ensure a row exists before merging; first PUT may arrive before any GET.
    ProfileService::get_or_create(state.db(), &state.profile_events, &auth).await?;

    let profile =
        ProfileService::update(state.db(), &state.profile_events, auth.user_id, req).await?;
    Ok(Json(ProfileService::to_response(profile)))
}
