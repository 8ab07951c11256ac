//! User infrastructure module
//!
//! Concrete collaborators for the user registry: bcrypt password hashing,
//! the in-memory repository, and the account service orchestration.

pub(crate) mod password;
pub(crate) mod repository;
pub(crate) mod service;

pub use password::{BcryptHasher, PasswordHasher, DEFAULT_BCRYPT_COST};
pub use repository::InMemoryUserRepository;
pub use service::{AccountService, AuthSuccess, RegisterRequest};
