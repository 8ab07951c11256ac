//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId, UserUpdate};
use crate::domain::DomainError;

/// Repository trait for user storage.
///
/// The service layer never mutates records directly; all writes go through
/// this interface. Implementations must make the uniqueness check and insert
/// in `create` atomic so two registrations for the same email cannot race.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Look up a user by email (for login). Emails are matched exactly,
    /// case-sensitive as stored.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Create a new user. The store assigns the id and creation timestamp
    /// and fails with a conflict if the email is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Apply a partial update. Returns `None` if the id is unknown; on
    /// success the store sets `updated_at`.
    async fn update(&self, id: UserId, changes: UserUpdate) -> Result<Option<User>, DomainError>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
