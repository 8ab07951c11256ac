//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::domain::{DomainError, User, UserId};
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::user::{AccountService, AuthSuccess, PasswordHasher, RegisterRequest};

/// Application state shared by every handler, using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<AuthSuccess, DomainError>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, DomainError>;
    fn authenticate(&self, token: &str) -> Result<UserId, DomainError>;
    async fn profile(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn update_profile(&self, id: UserId, name: String)
        -> Result<Option<User>, DomainError>;
    fn token_ttl_secs(&self) -> i64;
}

#[async_trait::async_trait]
impl<R, H, T> AccountServiceTrait for AccountService<R, H, T>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    async fn register(&self, request: RegisterRequest) -> Result<AuthSuccess, DomainError> {
        AccountService::register(self, request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, DomainError> {
        AccountService::login(self, email, password).await
    }

    fn authenticate(&self, token: &str) -> Result<UserId, DomainError> {
        AccountService::authenticate(self, token)
    }

    async fn profile(&self, id: UserId) -> Result<Option<User>, DomainError> {
        AccountService::profile(self, id).await
    }

    async fn update_profile(
        &self,
        id: UserId,
        name: String,
    ) -> Result<Option<User>, DomainError> {
        AccountService::update_profile(self, id, name).await
    }

    fn token_ttl_secs(&self) -> i64 {
        AccountService::token_ttl_secs(self)
    }
}

impl AppState {
    /// Build state from a concrete account service
    pub fn new(account_service: Arc<dyn AccountServiceTrait>) -> Self {
        Self { account_service }
    }
}
