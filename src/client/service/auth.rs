use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, HttpTransport},
        error::Error,
    },
    model::auth::{LoginDto, RegisterDto, TokenDto},
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub struct AuthService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> AuthService<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Exchange email & password for a bearer token
    pub async fn login(&self, dto: &LoginDto) -> Result<TokenDto, Error> {
        self.api
            .post::<_, TokenDto>("/login", dto)
            .await
            .inspect_err(|e| tracing::debug!("Login failed: {}", e))
            .map_err(Error::from)
    }

    /// Create an account and receive a bearer token for it
    pub async fn register(&self, dto: &RegisterDto) -> Result<TokenDto, Error> {
        self.api
            .post::<_, TokenDto>("/register", dto)
            .await
            .inspect_err(|e| tracing::debug!("Registration failed: {}", e))
            .map_err(Error::from)
    }
}

/// Name shown after login, the local part of the email address
pub fn display_name_from_email(email: &str) -> String {
    match email.trim().split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => crate::client::session::DEFAULT_DISPLAY_NAME.to_string(),
    }
}
