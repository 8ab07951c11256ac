//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate};
use crate::domain::DomainError;

/// In-memory implementation of `UserRepository`.
///
/// Ids are assigned from a monotonic counter starting at 1. The email index
/// is keyed by the exact stored string, so lookups are case-sensitive. All
/// state lives behind a single lock; `create` performs its uniqueness check
/// and insert under the write lock, which keeps registration race-free.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i64, User>,
    /// Index for email -> user id lookup
    email_index: HashMap<String, i64>,
    next_id: i64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                email_index: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .email_index
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id.as_i64()).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;

        if inner.email_index.contains_key(&new_user.email) {
            return Err(DomainError::conflict(format!(
                "email '{}' is already registered",
                new_user.email
            )));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User::new(
            UserId::new(id),
            new_user.name,
            new_user.email,
            new_user.password_hash,
        );

        inner.email_index.insert(user.email().to_string(), id);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: UserId, changes: UserUpdate) -> Result<Option<User>, DomainError> {
        let mut inner = self.inner.write().await;

        let Some(user) = inner.users.get_mut(&id.as_i64()) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            user.set_name(name);
        }

        Ok(Some(user.clone()))
    }
}
