//! Authentication module
//!
//! The hosted identity provider owns sign-up, sign-in, and token issuance.
//! This module only verifies the bearer tokens it mints and extracts the
//! authenticated user for request handlers.

mod middleware;
mod token;

pub use middleware::AuthUser;
pub use token::{Claims, TokenError, TokenVerifier};
