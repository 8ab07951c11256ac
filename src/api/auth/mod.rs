//! Authentication endpoints: registration and login

use axum::{extract::State, http::StatusCode, routing::post, Router};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::user::{AuthSuccess, RegisterRequest};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration request body. Absent fields deserialize to empty strings
/// and fail shape validation, so missing and empty are handled alike.
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response for successful registration and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_at: String,
}

/// User view safe to expose: excludes the password digest
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id().as_i64(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().map(|t| t.to_rfc3339()),
        }
    }
}

impl AuthResponse {
    fn from_outcome(outcome: AuthSuccess, ttl_secs: i64) -> Self {
        let expires_at = Utc::now() + Duration::seconds(ttl_secs);

        Self {
            user: UserResponse::from_user(&outcome.user),
            token: outcome.token,
            expires_at: expires_at.to_rfc3339(),
        }
    }
}

/// Create an account
///
/// POST /auth/register
///
/// Returns 201 with the public user view and a session token.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let outcome = state
        .account_service
        .register(RegisterRequest {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;

    let ttl = state.account_service.token_ttl_secs();

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::from_outcome(outcome, ttl)),
    ))
}

/// Log in with email and password
///
/// POST /auth/login
///
/// Returns 200 with a fresh session token. Unknown email and wrong
/// password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthResponse>, ApiError> {
    let outcome = state
        .account_service
        .login(&body.email, &body.password)
        .await?;

    let ttl = state.account_service.token_ttl_secs();

    Ok(Json(AuthResponse::from_outcome(outcome, ttl)))
}
