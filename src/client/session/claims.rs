//! Unverified decoding of the identity carried in a bearer token.
//!
//! The token is a JWT issued by the API. Its signature is never checked here, the payload is
//! only read to show who is logged in and to drop tokens that have already expired. The API
//! verifies the token on every request that needs it.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::client::error::ClaimsError;

/// Identity claims read from a token payload
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub user_id: i64,
    /// `None` when the token does not carry a role claim
    pub is_babysitter: Option<bool>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Identity {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Outcome of reading a possibly persisted token
#[derive(Debug)]
pub enum TokenIdentity {
    /// No token, or an empty one
    Absent,
    /// A token exists but its payload could not be decoded
    Unparseable(ClaimsError),
    Valid(Identity),
}

#[derive(Deserialize)]
struct Claims {
    sub: Option<Value>,
    is_babysitter: Option<Value>,
    exp: Option<f64>,
}

/// Classify a token without side effects
pub fn parse_identity(token: Option<&str>) -> TokenIdentity {
    match token.map(str::trim).filter(|token| !token.is_empty()) {
        None => TokenIdentity::Absent,
        Some(token) => match decode_identity(token) {
            Ok(identity) => TokenIdentity::Valid(identity),
            Err(err) => TokenIdentity::Unparseable(err),
        },
    }
}

/// Decode the payload segment of a `header.payload.signature` token
pub fn decode_identity(token: &str) -> Result<Identity, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClaimsError::MalformedToken);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    let user_id = match claims.sub {
        None | Some(Value::Null) => return Err(ClaimsError::MissingSubject),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| ClaimsError::InvalidSubject(number.to_string()))?,
        Some(Value::String(subject)) => subject
            .trim()
            .parse::<i64>()
            .map_err(|_| ClaimsError::InvalidSubject(subject))?,
        Some(other) => return Err(ClaimsError::InvalidSubject(other.to_string())),
    };

    // The API stores booleans as integers in some responses
    let is_babysitter = match claims.is_babysitter {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::Number(number)) => number.as_i64().map(|n| n != 0),
        _ => None,
    };

    let expires_at = claims
        .exp
        .and_then(|exp| DateTime::from_timestamp(exp.trunc() as i64, 0));

    Ok(Identity {
        user_id,
        is_babysitter,
        expires_at,
    })
}
