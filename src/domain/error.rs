use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Token expired: {message}")]
    ExpiredToken { message: String },

    #[error("Invalid token: {message}")]
    InvalidToken { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn expired_token(message: impl Into<String>) -> Self {
        Self::ExpiredToken {
            message: message.into(),
        }
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Check whether this error represents a failed token check
    pub fn is_token_error(&self) -> bool {
        matches!(self, Self::ExpiredToken { .. } | Self::InvalidToken { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("missing fields");
        assert_eq!(error.to_string(), "Validation error: missing fields");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("email already in use");
        assert_eq!(error.to_string(), "Conflict: email already in use");
    }

    #[test]
    fn test_token_error_kinds_are_distinct() {
        let expired = DomainError::expired_token("exp elapsed");
        let invalid = DomainError::invalid_token("bad signature");

        assert!(expired.is_token_error());
        assert!(invalid.is_token_error());
        assert!(matches!(expired, DomainError::ExpiredToken { .. }));
        assert!(matches!(invalid, DomainError::InvalidToken { .. }));
        assert!(!DomainError::authentication("nope").is_token_error());
    }
}
