use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_babysitter: bool,
}

/// Bearer token issued on login or registration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}
