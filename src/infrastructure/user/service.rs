//! Account service: registration, login, and the bearer-token gate

use std::sync::Arc;

use crate::domain::user::{
    validate_email, validate_name, validate_password, NewUser, User, UserId, UserRepository,
    UserUpdate,
};
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenIssuer;

use super::password::PasswordHasher;

/// Message returned for every failed login attempt. Unknown email and wrong
/// password are deliberately indistinguishable.
const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Request for creating a new account
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful registration or login: the stored record plus a fresh token
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub user: User,
    pub token: String,
}

/// Orchestrates the user store, password hasher, and token issuer
#[derive(Debug)]
pub struct AccountService<R: UserRepository, H: PasswordHasher, T: TokenIssuer> {
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> AccountService<R, H, T>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    /// Create a new account service
    pub fn new(repository: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Register a new account and issue a session token
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthSuccess, DomainError> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(DomainError::validation(
                "name, email and password are required",
            ));
        }

        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        // Uniqueness is checked before password rules, matching the order
        // callers observe: a taken email wins over a short password.
        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict("email already in use"));
        }

        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hash_password(request.password).await?;

        let user = self
            .repository
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(user.id())?;

        Ok(AuthSuccess { user, token })
    }

    /// Authenticate with email and password and issue a session token
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, DomainError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("email and password are required"));
        }

        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::authentication(INVALID_CREDENTIALS))?;

        if !self.verify_password(password, user.password_hash()).await? {
            return Err(DomainError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.tokens.issue(user.id())?;

        Ok(AuthSuccess { user, token })
    }

    /// Request-admission gate: verify a bearer token and return its subject.
    ///
    /// Expired and invalid tokens propagate as their own error kinds so the
    /// caller can render distinct messages. The subject is not re-checked
    /// against the store here; handlers that need the record look it up and
    /// answer 404 when it is gone.
    pub fn authenticate(&self, token: &str) -> Result<UserId, DomainError> {
        self.tokens.verify(token)
    }

    /// Fetch the profile record for an authenticated subject
    pub async fn profile(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.find_by_id(id).await
    }

    /// Update the subject's display name. Returns `None` when the record
    /// no longer exists.
    pub async fn update_profile(
        &self,
        id: UserId,
        name: String,
    ) -> Result<Option<User>, DomainError> {
        validate_name(&name).map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository
            .update(id, UserUpdate { name: Some(name) })
            .await
    }

    /// Configured token lifetime, for rendering `expires_at`
    pub fn token_ttl_secs(&self) -> i64 {
        self.tokens.ttl_secs()
    }

    // Bcrypt is CPU-bound (~100ms at cost 10), so both hashing and
    // verification run on the blocking pool.

    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, digest: &str) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let digest = digest.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| DomainError::internal(format!("password verify task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::{JwtTokenService, TokenConfig};
    use crate::infrastructure::user::password::BcryptHasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    type TestService = AccountService<InMemoryUserRepository, BcryptHasher, JwtTokenService>;

    fn create_service() -> TestService {
        create_service_with_ttl(3600)
    }

    fn create_service_with_ttl(ttl_secs: i64) -> TestService {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(BcryptHasher::new(4));
        let tokens =
            Arc::new(JwtTokenService::new(TokenConfig::new("test-secret", ttl_secs)).unwrap());
        AccountService::new(repository, hasher, tokens)
    }

    fn make_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let service = create_service();

        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        assert_eq!(outcome.user.name(), "Ana");
        assert_eq!(outcome.user.email(), "a@x.com");
        assert!(!outcome.token.is_empty());
        // The stored digest is never the plaintext
        assert_ne!(outcome.user.password_hash(), "secret1");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let service = create_service();

        let request = RegisterRequest {
            name: String::new(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };

        let result = service.register(request).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_password_boundary() {
        let service = create_service();

        // 5 characters rejected
        let result = service.register(make_request("a@x.com", "12345")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        // 6 characters accepted
        let outcome = service.register(make_request("a@x.com", "123456")).await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let result = service.register(make_request("a@x.com", "other-password")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_conflict_wins_over_short_password() {
        let service = create_service();

        service.register(make_request("a@x.com", "secret1")).await.unwrap();

        // Taken email plus a 5-char password reports the conflict
        let result = service.register(make_request("a@x.com", "12345")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = create_service();
        service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let outcome = service.login("a@x.com", "secret1").await.unwrap();
        assert_eq!(outcome.user.email(), "a@x.com");
        assert!(!outcome.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = create_service();
        service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let wrong_password = service.login("a@x.com", "wrong-password").await.unwrap_err();
        let unknown_email = service.login("ghost@x.com", "secret1").await.unwrap_err();

        // Same kind and same message for both failure modes
        assert!(matches!(wrong_password, DomainError::Authentication { .. }));
        assert!(matches!(unknown_email, DomainError::Authentication { .. }));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let service = create_service();

        let result = service.login("", "secret1").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_roundtrip() {
        let service = create_service();

        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let subject = service.authenticate(&outcome.token).unwrap();
        assert_eq!(subject, outcome.user.id());
    }

    #[tokio::test]
    async fn test_authenticate_expired_token() {
        let service = create_service_with_ttl(-1);

        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let result = service.authenticate(&outcome.token);
        assert!(matches!(result, Err(DomainError::ExpiredToken { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_survives_subject_deletion() {
        // The gate only proves signature and expiry; it does not consult
        // the store, so a token stays valid after its subject vanishes.
        let service = create_service();

        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let subject = service.authenticate(&outcome.token).unwrap();
        assert_eq!(subject, outcome.user.id());

        let missing = service.profile(UserId::new(999)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let service = create_service();
        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let profile = service.profile(outcome.user.id()).await.unwrap().unwrap();
        assert_eq!(profile.email(), "a@x.com");
    }

    #[tokio::test]
    async fn test_update_profile() {
        let service = create_service();
        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let updated = service
            .update_profile(outcome.user.id(), "Ana Maria".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name(), "Ana Maria");
        assert!(updated.updated_at().is_some());
    }

    #[tokio::test]
    async fn test_update_profile_empty_name() {
        let service = create_service();
        let outcome = service.register(make_request("a@x.com", "secret1")).await.unwrap();

        let result = service.update_profile(outcome.user.id(), "  ".to_string()).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_profile_unknown_subject() {
        let service = create_service();

        let result = service
            .update_profile(UserId::new(999), "Ghost".to_string())
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
