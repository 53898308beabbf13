//! Constant values shared across tests.
//!
//! None of these are real credentials.

/// HMAC secret the mock tokens are signed with.
///
/// The client never verifies signatures, any secret works.
pub static TEST_JWT_SECRET: &str = "test_jwt_secret";

/// Lifetime of mock tokens, matching the one hour tokens issued by the API.
pub static TEST_TOKEN_LIFETIME_SECONDS: i64 = 3600;

pub static TEST_EMAIL: &str = "a@b.com";
pub static TEST_PASSWORD: &str = "x";
pub static TEST_NAME: &str = "Jane Doe";
