use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Token is empty")]
    EmptyToken,
    #[error("Token does not have three dot-separated segments")]
    MalformedToken,
    #[error("Token payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Token payload has no subject claim")]
    MissingSubject,
    #[error("Token subject {0:?} is not an integer user ID")]
    InvalidSubject(String),
}
