//! Factory functions for generating mock bearer tokens.
//!
//! Tokens are signed HS256 JWTs with the same claims the API puts in them: the user ID as a
//! string `sub` and an `exp` one hour out. A role claim can be added to exercise clients that
//! read it.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::constant::{TEST_JWT_SECRET, TEST_TOKEN_LIFETIME_SECONDS};

/// Claims encoded into a mock token
#[derive(Clone, Debug, Serialize)]
pub struct MockClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_babysitter: Option<bool>,
}

impl MockClaims {
    /// Claims for `user_id` expiring one hour from now
    pub fn new(user_id: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: Utc::now().timestamp() + TEST_TOKEN_LIFETIME_SECONDS,
            is_babysitter: None,
        }
    }

    /// Move the expiry one hour into the past
    pub fn expired(mut self) -> Self {
        self.exp = Utc::now().timestamp() - TEST_TOKEN_LIFETIME_SECONDS;
        self
    }

    pub fn with_babysitter(mut self, is_babysitter: bool) -> Self {
        self.is_babysitter = Some(is_babysitter);
        self
    }
}

/// Signed token for `user_id` with default claims
pub fn mock_token(user_id: i64) -> String {
    mock_token_with(&MockClaims::new(user_id))
}

/// Signed token carrying `claims`
pub fn mock_token_with(claims: &MockClaims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode mock token")
}
