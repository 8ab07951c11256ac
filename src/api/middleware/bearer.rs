//! Bearer-token request gate

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::UserId;

/// Extractor that requires a valid bearer token and yields its subject.
///
/// The gate proves only signature and expiry; it does not consult the user
/// store. Handlers that need the record look it up themselves and answer
/// 404 when the subject has since been removed.
#[derive(Debug, Clone, Copy)]
pub struct RequireSubject(pub UserId);

impl FromRequestParts<AppState> for RequireSubject {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Validating bearer token");

        let subject = state.account_service.authenticate(&token)?;

        Ok(RequireSubject(subject))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// Each failure mode gets its own message so clients can tell a missing
/// header from a malformed one.
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Err(
            ApiError::unauthorized("missing authorization header, log in to continue")
                .with_code("missing_token"),
        );
    };

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::unauthorized("malformed authorization header").with_code("malformed_header")
    })?;

    let mut parts = auth_str.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(
            ApiError::unauthorized("expected 'Authorization: Bearer <token>'")
                .with_code("malformed_header"),
        );
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(
            ApiError::unauthorized("authorization scheme must be Bearer")
                .with_code("malformed_header"),
        );
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer eyJhbGciOiJIUzI1NiJ9.test".parse().unwrap(),
        );

        let result = extract_bearer_token(&headers);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "eyJhbGciOiJIUzI1NiJ9.test");
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();

        let err = extract_bearer_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.response.error.code, Some("missing_token".to_string()));
    }

    #[test]
    fn test_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        let err = extract_bearer_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.response.error.code, Some("malformed_header".to_string()));
    }

    #[test]
    fn test_missing_token_part() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer".parse().unwrap());

        let err = extract_bearer_token(&headers).unwrap_err();
        assert_eq!(err.response.error.code, Some("malformed_header".to_string()));
    }

    #[test]
    fn test_too_many_parts() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer abc extra".parse().unwrap(),
        );

        let err = extract_bearer_token(&headers).unwrap_err();
        assert_eq!(err.response.error.code, Some("malformed_header".to_string()));
    }

    #[test]
    fn test_case_insensitive_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "bearer some-token".parse().unwrap());

        let result = extract_bearer_token(&headers);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "some-token");
    }
}
