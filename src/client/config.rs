use crate::client::error::ConfigError;

/// API used when `API_BASE_URL` is not set anywhere.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const API_BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// The runtime environment wins on native targets, then the value `build.rs` baked in at
    /// compile time, then [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(API_BASE_URL_VAR).ok();

        Self::from_api_base_url(runtime.as_deref().or(option_env!("API_BASE_URL")))
    }

    pub fn from_api_base_url(api_base_url: Option<&str>) -> Result<Self, ConfigError> {
        let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) else {
            return Ok(Self::default());
        };

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: API_BASE_URL_VAR.to_string(),
                reason: format!("expected an http:// or https:// URL, got {:?}", url),
            });
        }

        Ok(Self {
            api_base_url: url.trim_end_matches('/').to_string(),
        })
    }
}
