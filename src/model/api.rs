use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body returned when an API request fails
///
/// `detail` is a plain string for errors raised by the API itself and a list of
/// `{ "loc": [...], "msg": "...", "type": "..." }` objects for request validation failures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub detail: Value,
}

impl ErrorDto {
    /// Human readable message carried by the error body, if any
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
            Value::Array(entries) => entries
                .iter()
                .find_map(|entry| entry.get("msg").and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Acknowledgement returned by mutating endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}
