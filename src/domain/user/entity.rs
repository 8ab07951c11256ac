//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned monotonically by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record as held by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name
    name: String,
    /// Email used for login, unique and case-sensitive as stored
    email: String,
    /// Bcrypt password digest - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Creation timestamp, set by the store
    created_at: DateTime<Utc>,
    /// Last update timestamp, absent until the record is first modified
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Fields needed to create a user; the store assigns id and created_at
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update applied through the store
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
}

impl User {
    /// Create a user record. Called by store implementations once an id
    /// has been assigned.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // Mutators

    /// Update the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, email: &str) -> User {
        User::new(UserId::new(id), "Test User", email, "hashed_password")
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "a@x.com");

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Test User");
        assert_eq!(user.email(), "a@x.com");
        assert_eq!(user.password_hash(), "hashed_password");
        assert!(user.updated_at().is_none());
    }

    #[test]
    fn test_set_name_touches_updated_at() {
        let mut user = create_test_user(1, "a@x.com");
        assert!(user.updated_at().is_none());

        user.set_name("Renamed");
        assert_eq!(user.name(), "Renamed");
        assert!(user.updated_at().is_some());
    }

    #[test]
    fn test_serialization_excludes_password() {
        let user = create_test_user(1, "a@x.com");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_serialization_omits_absent_updated_at() {
        let user = create_test_user(1, "a@x.com");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("updated_at"));
    }
}
