//! Profile endpoints, gated by a bearer token

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::api::auth::UserResponse;
use crate::api::middleware::RequireSubject;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Create the profile router
pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// Profile response envelope
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

/// Update request body
#[derive(Debug, Deserialize)]
pub struct UpdateProfileBody {
    #[serde(default)]
    pub name: String,
}

/// Fetch the authenticated user's profile
///
/// GET /profile
///
/// 404 when the token's subject no longer exists in the store.
pub async fn get_profile(
    State(state): State<AppState>,
    RequireSubject(subject): RequireSubject,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .account_service
        .profile(subject)
        .await?
        .ok_or_else(|| ApiError::not_found("user no longer exists"))?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from_user(&user),
    }))
}

/// Update the authenticated user's display name
///
/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    RequireSubject(subject): RequireSubject,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .account_service
        .update_profile(subject, body.name)
        .await?
        .ok_or_else(|| ApiError::not_found("user no longer exists"))?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from_user(&user),
    }))
}
