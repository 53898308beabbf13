use dioxus_logger::tracing;
use reqwasm::http::Request;

use crate::client::{
    api::transport::{ApiRequest, ApiResponse, HttpTransport, Method},
    error::ApiError,
};

/// Transport for the browser build, backed by the fetch API
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwasmTransport;

impl HttpTransport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!(url = %request.url, "Request failed: {}", e);

            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
