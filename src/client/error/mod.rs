//! Error types for the Babysitter Match client.
//!
//! Each concern has its own `thiserror` enum (API transport, token claims, configuration,
//! persisted storage). [`Error`] aggregates the ones a view can run into and knows how to turn
//! any failure into the single inline message it renders. Configuration errors are handled once
//! at startup.

pub mod api;
pub mod claims;
pub mod config;
pub mod storage;

use thiserror::Error;

pub use api::ApiError;
pub use claims::ClaimsError;
pub use config::ConfigError;
pub use storage::StorageError;

/// Main error type returned by the client service layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Request failed in transport, was rejected by the server or returned an unexpected body.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Bearer token payload could not be decoded.
    #[error(transparent)]
    ClaimsError(#[from] ClaimsError),
    /// Persisted session storage could not be read or written.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Action requires a session and none exists, no request was sent.
    #[error("{0}")]
    Unauthenticated(&'static str),
}

impl Error {
    /// Message shown inline by a view when its action fails.
    ///
    /// Server supplied messages take priority, everything else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthenticated(message) => message.to_string(),
            Self::ApiError(err) => err.user_message(fallback),
            _ => fallback.to_string(),
        }
    }
}
