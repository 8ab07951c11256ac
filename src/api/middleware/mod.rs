//! Request extractors applied to protected routes

mod bearer;

pub use bearer::{extract_bearer_token, RequireSubject};
