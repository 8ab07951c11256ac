use axum::{
    http::{Method, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::profile;
use super::state::AppState;
use super::types::{ApiError, Json};

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Service banner
        .route("/", get(index))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints (no token required)
        .nest("/auth", auth::create_auth_router())
        // Profile endpoints (bearer token required)
        .merge(profile::create_profile_router())
        // Unknown routes answer JSON, not a bare 404
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Root route: service name, version, and the available endpoints
async fn index() -> impl IntoResponse {
    Json(json!({
        "api": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "routes": {
            "register": "POST /auth/register",
            "login": "POST /auth/login",
            "profile": "GET /profile",
            "update_profile": "PUT /profile",
        },
    }))
}

async fn fallback(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("{} {} does not exist", method, uri.path()))
}
