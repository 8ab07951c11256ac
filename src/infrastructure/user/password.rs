//! Password hashing using bcrypt

use std::fmt::Debug;

use crate::domain::user::MAX_PASSWORD_LENGTH;
use crate::domain::DomainError;

/// Default bcrypt cost. Each increment roughly doubles the hashing work.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt. Fails on empty input or
    /// input beyond the algorithm's 72-byte limit.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a stored digest. The comparison is
    /// constant-time with respect to the digest; a malformed digest
    /// returns `false` rather than an error.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Bcrypt-based password hasher with a configurable work factor
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with an explicit cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        if password.is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }

        if password.len() > MAX_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "password exceeds maximum length of {} bytes",
                MAX_PASSWORD_LENGTH
            )));
        }

        bcrypt::hash(password, self.cost)
            .map_err(|e| DomainError::internal(format!("failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
