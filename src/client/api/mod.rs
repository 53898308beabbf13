//! HTTP client wrapper for the Babysitter Match API.
//!
//! [`ApiClient`] issues JSON requests against a single base URL and attaches the bearer
//! credential when one is set. The actual I/O goes through an [`HttpTransport`]: `reqwasm`
//! in the browser and `reqwest` everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
pub mod transport;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::error::ApiError, model::api::ErrorDto};

#[cfg(target_arch = "wasm32")]
pub use browser::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

/// JSON client bound to one API base URL.
///
/// Cloning is cheap. A clone taken before a request is a snapshot of the credential, so
/// changing the credential afterwards never affects a request that is already in flight.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    credential: Option<String>,
}

impl<T> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            credential: None,
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Set or clear the bearer credential used by subsequent requests
    pub fn set_credential(&mut self, credential: Option<String>) {
        self.credential = credential;
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Get, path, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("Failed to encode request body: {}", e)))?;

        self.execute(Method::Post, path, Some(body)).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: self.credential.clone(),
            body,
        };

        tracing::debug!(
            method = ?request.method,
            url = %request.url,
            authenticated = request.bearer.is_some(),
            "Sending API request"
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorDto>(&response.body)
                .ok()
                .and_then(|error_dto| error_dto.message());

            return Err(ApiError::Status {
                status: response.status,
                detail,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
