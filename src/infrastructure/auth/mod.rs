//! Authentication infrastructure module
//!
//! JWT token issuance and verification for the session lifecycle.

mod token;

pub use token::{
    JwtTokenService, TokenClaims, TokenConfig, TokenIssuer, DEFAULT_TOKEN_TTL_SECS,
};
