//! User domain
//!
//! Domain types for the user registry: the user entity, the repository
//! trait consumed by the account service, and input-shape validation.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId, UserUpdate};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_name, validate_password, UserValidationError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
