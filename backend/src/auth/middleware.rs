//! Authenticated-user extraction
//!
//! Axum extractor that verifies the bearer token on each request using the
//! pre-computed verifier from AppState.

use crate::auth::token::Claims;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated user extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// Email asserted by the identity provider, used to bootstrap profiles
    pub email: Option<String>,
    /// Display name asserted by the identity provider
    pub name: Option<String>,
}

impl AuthUser {
    pub fn from_claims(user_id: Uuid, claims: Claims) -> Self {
        Self {
            user_id,
            email: claims.email,
            name: claims.name,
        }
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let (user_id, claims) = app_state
            .verifier()
            .verify_user(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthUser::from_claims(user_id, claims))
    }
}
