//! JWT token issuance and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Default token lifetime: 7 days
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id, rendered as a string)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl TokenClaims {
    /// Create new claims for a subject
    pub fn new(user_id: UserId, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_secs);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_secs: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }
}

/// Trait for token operations
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a signed, time-bounded token for a subject
    fn issue(&self, user_id: UserId) -> Result<String, DomainError>;

    /// Verify a token and return its subject. Fails with
    /// `DomainError::ExpiredToken` when the signature is valid but the
    /// expiry has elapsed, and `DomainError::InvalidToken` for every other
    /// failure (bad signature, malformed structure, wrong algorithm).
    fn verify(&self, token: &str) -> Result<UserId, DomainError>;

    /// Get the configured token lifetime in seconds
    fn ttl_secs(&self) -> i64;
}

/// Token service implementation using HMAC-SHA256
#[derive(Clone)]
pub struct JwtTokenService {
    ttl_secs: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("ttl_secs", &self.ttl_secs)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtTokenService {
    /// Create a new token service. An empty secret is a configuration
    /// error: the caller must treat it as fatal at startup, not as a
    /// per-request condition.
    pub fn new(config: TokenConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::configuration(
                "token signing secret must not be empty",
            ));
        }

        Ok(Self {
            ttl_secs: config.ttl_secs,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        })
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user_id: UserId) -> Result<String, DomainError> {
        let claims = TokenClaims::new(user_id, self.ttl_secs);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("failed to sign token: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<UserId, DomainError> {
        let mut validation = Validation::default();
        // Verification uses the local wall clock with no skew allowance
        validation.leeway = 0;

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        DomainError::expired_token("token expiry has elapsed")
                    }
                    _ => DomainError::invalid_token(format!("token rejected: {}", e)),
                }
            })?;

        let subject: i64 = token_data
            .claims
            .sub
            .parse()
            .map_err(|_| DomainError::invalid_token("token subject is not a user id"))?;

        Ok(UserId::new(subject))
    }

    fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
