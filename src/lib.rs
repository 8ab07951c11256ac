//! Identity API
//!
//! A small user-registry service: account registration, login, and a
//! token-protected profile. The credential core - bcrypt password hashing,
//! JWT issuance and verification - sits behind an account service that
//! consumes an injected user store, so the HTTP layer only translates
//! outcomes into responses.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::auth::{JwtTokenService, TokenConfig};
use infrastructure::user::{AccountService, BcryptHasher, InMemoryUserRepository};

/// Create the application state with all services initialized.
///
/// Fails when the token secret is empty - a fatal startup condition.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(BcryptHasher::new(config.auth.bcrypt_cost));
    let tokens = Arc::new(JwtTokenService::new(TokenConfig::new(
        config.auth.secret.clone(),
        config.auth.token_ttl_secs,
    ))?);

    let account_service = Arc::new(AccountService::new(repository, hasher, tokens));

    Ok(AppState::new(account_service))
}
